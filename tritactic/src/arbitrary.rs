use crate::{Board, Mark};

/// A placement sequence that is legal by construction: each raw step
/// indexes into the cells that are empty at that point of the replay.
#[derive(Clone, Debug)]
pub struct PlacementScript {
    pub steps: Vec<(Mark, u8)>,
}

impl PlacementScript {
    pub fn replay(&self, board: &mut Board) {
        for &(mark, raw) in &self.steps {
            let open: Vec<u8> = board.empty_cells().collect();
            let cell = open[raw as usize % open.len()];
            board.place(cell, mark).unwrap();
        }
    }
}

impl quickcheck::Arbitrary for PlacementScript {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Long enough to force several evictions for a single side.
        let len = usize::arbitrary(g) % 12;
        let mut steps = Vec::with_capacity(len);
        for _ in 0..len {
            steps.push((Mark::arbitrary(g), u8::arbitrary(g)));
        }
        PlacementScript { steps }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Mark {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Mark::X, Mark::O]).unwrap()
    }
}
