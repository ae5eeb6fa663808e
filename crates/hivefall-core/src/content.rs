//! Declarative level and UI content.
//!
//! Each layout is a rectangular grid of symbols; the stage director maps
//! every symbol to an entity factory for the tile's pixel rect and skips
//! anything it does not recognize.

pub type Layout = &'static [&'static str];

pub const TITLE: Layout = &[
    "                               ",
    "                               ",
    "   &&&  &     &&   &&& &  &    ",
    "   &  & &    &  & &    & &     ",
    "   &&&  &    &  & &    &&      ",
    "   &  & &    &  & &    & &     ",
    "   &&&  &&&&  &&   &&& &  &    ",
    "                               ",
    "  & &  %&   % & && &&%&&  &&&  ",
    "  & && %&   %& %& %&& & % &&   ",
    "  & & &% & & &&%& %&  &&    &  ",
    "  & &  %  &  & %&& &&%& % &&&  ",
    "                               ",
    "                               ",
    "                               ",
    "               !               ",
    "                               ",
    "                               ",
    "                               ",
    "                               ",
    "                               ",
    "               P               ",
];

const STAGE_1: Layout = &[
    "  H                           ",
    "                              ",
    "     S S S S S S S S S S S    ",
    "                              ",
    "     M M M M M M M M M M M    ",
    "                              ",
    "     M M M M M M M M M M M    ",
    "                              ",
    "     L L L L L L L L L L L    ",
    "                              ",
    "     L L L L L L L L L L L    ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
    "  ####    ####   ####   ####  ",
    "  #  #    #  #   #  #   #  #  ",
    "                              ",
    "                              ",
    "                              ",
];

const STAGE_2: Layout = &[
    " H                            ",
    "                              ",
    "                              ",
    "     S S S S S S S S S S S    ",
    "                              ",
    "     M M M M M M M M M M M    ",
    "                              ",
    "     M M M M M M M M M M M    ",
    "                              ",
    "     L L L L L L L L L L L    ",
    "                              ",
    "     L L L L L L L L L L L    ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
    "  ####    ####   ####   ####  ",
    "  #  #    #  #   #  #   #  #  ",
    "                              ",
    "                              ",
    "                              ",
];

const STAGE_3: Layout = &[
    " H                            ",
    "                              ",
    "                              ",
    "                              ",
    "     S S S S S S S S S S S    ",
    "                              ",
    "     M M M M M M M M M M M    ",
    "                              ",
    "     M M M M M M M M M M M    ",
    "                              ",
    "     L L L L L L L L L L L    ",
    "                              ",
    "     L L L L L L L L L L L    ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
    "  ####    ####   ####   ####  ",
    "  #  #    #  #   #  #   #  #  ",
    "                              ",
    "                              ",
    "                              ",
];

const STAGE_4: Layout = &[
    " H                            ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
    "     S S S S S S S S S S S    ",
    "                              ",
    "     M M M M M M M M M M M    ",
    "                              ",
    "     M M M M M M M M M M M    ",
    "                              ",
    "     L L L L L L L L L L L    ",
    "                              ",
    "     L L L L L L L L L L L    ",
    "                              ",
    "                              ",
    "                              ",
    "  ####    ####   ####   ####  ",
    "  #  #    #  #   #  #   #  #  ",
    "                              ",
    "                              ",
    "                              ",
];

const STAGE_5: Layout = &[
    " H                            ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
    "     S S S S S S S S S S S    ",
    "                              ",
    "     M M M M M M M M M M M    ",
    "                              ",
    "     M M M M M M M M M M M    ",
    "                              ",
    "     L L L L L L L L L L L    ",
    "                              ",
    "     L L L L L L L L L L L    ",
    "                              ",
    "                              ",
    "  ####    ####   ####   ####  ",
    "  #  #    #  #   #  #   #  #  ",
    "                              ",
    "                              ",
    "                              ",
];

const STAGE_6: Layout = &[
    " H                            ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
    "     S S S S S S S S S S S    ",
    "                              ",
    "     M M M M M M M M M M M    ",
    "                              ",
    "     M M M M M M M M M M M    ",
    "                              ",
    "     L L L L L L L L L L L    ",
    "                              ",
    "     L L L L L L L L L L L    ",
    "                              ",
    "  ####    ####   ####   ####  ",
    "  #  #    #  #   #  #   #  #  ",
    "                              ",
    "                              ",
    "                              ",
];

const STAGE_7: Layout = &[
    " H                            ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
    "     S S S S S S S S S S S    ",
    "                              ",
    "     M M M M M M M M M M M    ",
    "                              ",
    "     M M M M M M M M M M M    ",
    "                              ",
    "     L L L L L L L L L L L    ",
    "                              ",
    "     L L L L L L L L L L L    ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
];

const STAGE_8: Layout = &[
    " H                             ",
    "                               ",
    "                               ",
    "                               ",
    "                               ",
    "                               ",
    "                               ",
    "                               ",
    "                               ",
    "     S S S S S S S S S S S     ",
    "                               ",
    "     M M M M M M M M M M M     ",
    "                               ",
    "     M M M M M M M M M M M     ",
    "                               ",
    "     L L L L L L L L L L L     ",
    "                               ",
    "     L L L L L L L L L L L     ",
    "                               ",
    "                               ",
    "                               ",
    "                               ",
];

pub const GAME_OVER: Layout = &[
    "                              ",
    "                              ",
    "    @@@@@ @@@@@ @   @ @@@@    ",
    "    @     @   @ @@ @@ @       ",
    "    @ @@@ @@@@@ @ @ @ @@@     ",
    "    @   @ @   @ @   @ @       ",
    "    @@@@@ @   @ @   @ @@@@    ",
    "                              ",
    "    @@@@@ @   @ @@@@@ @@@     ",
    "    @   @ @   @ @     @  @    ",
    "    @   @  @ @  @@@@  @@@     ",
    "    @   @  @ @  @     @@@     ",
    "    @@@@@   @   @@@@@ @  @    ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
    "                              ",
];

pub const UI: Layout = &[
    " S                        L   ",
];

const STAGES: [Layout; 8] = [
    STAGE_1, STAGE_2, STAGE_3, STAGE_4, STAGE_5, STAGE_6, STAGE_7, STAGE_8,
];

/// Layout for the given stage number; out-of-range stages resolve to the
/// game-over screen.
pub fn stage(number: u32) -> Layout {
    STAGES
        .get(number.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or(GAME_OVER)
}
