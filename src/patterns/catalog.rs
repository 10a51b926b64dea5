//! Built-in patterns, stored as plaintext.

/// A named built-in pattern.
pub struct Builtin {
    pub name: &'static str,
    pub text: &'static str,
}

pub const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "block",
        text: "OO\nOO",
    },
    Builtin {
        name: "blinker",
        text: "OOO",
    },
    Builtin {
        name: "toad",
        text: ".OOO\nOOO.",
    },
    Builtin {
        name: "beacon",
        text: "OO..\nOO..\n..OO\n..OO",
    },
    Builtin {
        name: "glider",
        text: ".O.\n..O\nOOO",
    },
    Builtin {
        name: "r-pentomino",
        text: ".OO\nOO.\n.O.",
    },
    Builtin {
        name: "pulsar",
        text: "\
..OOO...OOO..
.............
O....O.O....O
O....O.O....O
O....O.O....O
..OOO...OOO..
.............
..OOO...OOO..
O....O.O....O
O....O.O....O
O....O.O....O
.............
..OOO...OOO..",
    },
    Builtin {
        name: "gosper-glider-gun",
        text: "\
........................O...........
......................O.O...........
............OO......OO............OO
...........O...O....OO............OO
OO........O.....O...OO..............
OO........O...O.OO....O.O...........
..........O.....O.......O...........
...........O...O....................
............OO......................",
    },
];

/// Find a built-in by case-insensitive name.
#[must_use]
pub fn find(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|b| b.name.eq_ignore_ascii_case(name))
}

/// Names of every built-in, in catalog order.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|b| b.name)
}
