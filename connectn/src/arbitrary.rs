use quickcheck::{Arbitrary, Gen};

use crate::{PlayerColour, ALL_COLOURS};

#[derive(Clone, Debug)]
pub struct DropSequence {
    pub width: usize,
    pub height: usize,
    // Column numbers are occasionally out of range on purpose
    pub drops: Vec<(PlayerColour, usize)>,
}

impl Arbitrary for DropSequence {
    fn arbitrary(g: &mut Gen) -> Self {
        let width = 3 + (u8::arbitrary(g) % 6) as usize;
        let height = 3 + (u8::arbitrary(g) % 6) as usize;
        // Enough drops to sometimes overfill the board
        let num_drops = usize::arbitrary(g) % (width * height + 4);
        let drops = (0..num_drops)
            .map(|_| {
                let colour = PlayerColour::arbitrary(g);
                let column = (u8::arbitrary(g) as usize) % (width + 2);
                (colour, column)
            })
            .collect();
        DropSequence {
            width,
            height,
            drops,
        }
    }
}

impl Arbitrary for PlayerColour {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&ALL_COLOURS).unwrap()
    }
}
