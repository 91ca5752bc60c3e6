//! The UAX #14 pair table.
//!
//! A single immutable 2-D array mapping (class before, class after) to a
//! break decision. The table is built once, as data, from the pair rules
//! LB11-LB31; the explicit rules LB2-LB10 (hard breaks, spaces, zero width
//! space, combining mark attachment) and the context-dependent rules
//! (LB21a, LB30a) live in the rule engine, which consults this table last.
//!
//! Construction applies rules from lowest to highest priority so that a
//! later (higher-priority, lower-numbered) write wins, matching the
//! first-match-wins semantics of the rule list.

use once_cell::sync::Lazy;

use crate::properties::BreakClass::{
    self, After as BA, Alphabetic as AL, BeforeAndAfter as B2, CloseParenthesis as CP,
    Before as BB, ClosePunctuation as CL, Contingent as CB, EmojiBase as EB, EmojiModifier as EM,
    Exclamation as EX, Glue as GL, HangulLJamo as JL, HangulLvSyllable as H2,
    HangulLvtSyllable as H3, HangulTJamo as JT, HangulVJamo as JV, HebrewLetter as HL,
    Hyphen as HY, Ideographic as ID, InfixSeparator as IS, Inseparable as IN, NonStarter as NS,
    Numeric as NU, OpenPunctuation as OP, Postfix as PO, Prefix as PR, Quotation as QU,
    Space as SP, Symbol as SY, WordJoiner as WJ,
};

/// Outcome of a pair-table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PairDecision {
    /// Break allowed between adjacent characters.
    Direct,
    /// Break prohibited between adjacent characters, allowed when at least
    /// one space intervenes.
    Indirect,
    /// Break prohibited even across intervening spaces.
    Prohibited,
}

const N: usize = BreakClass::COUNT;

pub(crate) struct PairTable {
    cells: [[PairDecision; N]; N],
}

/// The process-wide table. Strictness tailoring happens during class
/// resolution (CJ and NS remapping), not here, so one table serves every
/// configuration.
pub(crate) static PAIR_TABLE: Lazy<PairTable> = Lazy::new(PairTable::build);

impl PairTable {
    #[inline]
    pub(crate) fn decide(&self, before: BreakClass, after: BreakClass) -> PairDecision {
        self.cells[before as usize][after as usize]
    }

    fn build() -> Self {
        use PairDecision::*;

        let mut cells = [[Direct; N]; N]; // LB31: break everywhere else

        let set = |cells: &mut [[PairDecision; N]; N], b: BreakClass, a: BreakClass, d: PairDecision| {
            cells[b as usize][a as usize] = d;
        };
        let set_row = |cells: &mut [[PairDecision; N]; N], b: BreakClass, d: PairDecision| {
            for a in 0..N {
                cells[b as usize][a] = d;
            }
        };
        let set_col = |cells: &mut [[PairDecision; N]; N], a: BreakClass, d: PairDecision| {
            for b in 0..N {
                cells[b][a as usize] = d;
            }
        };

        // LB30b: emoji base x emoji modifier.
        set(&mut cells, EB, EM, Indirect);

        // LB30: letters/digits against parentheses.
        for b in [AL, HL, NU] {
            set(&mut cells, b, OP, Indirect);
        }
        for a in [AL, HL, NU] {
            set(&mut cells, CP, a, Indirect);
        }

        // LB29: infix separator before letters.
        set(&mut cells, IS, AL, Indirect);
        set(&mut cells, IS, HL, Indirect);

        // LB28: no break between alphabetics.
        for b in [AL, HL] {
            for a in [AL, HL] {
                set(&mut cells, b, a, Indirect);
            }
        }

        // LB27: Korean syllables with postfix/prefix.
        for b in [JL, JV, JT, H2, H3] {
            set(&mut cells, b, PO, Indirect);
        }
        for a in [JL, JV, JT, H2, H3] {
            set(&mut cells, PR, a, Indirect);
        }

        // LB26: Korean syllable block composition.
        for a in [JL, JV, H2, H3] {
            set(&mut cells, JL, a, Indirect);
        }
        for b in [JV, H2] {
            for a in [JV, JT] {
                set(&mut cells, b, a, Indirect);
            }
        }
        for b in [JT, H3] {
            set(&mut cells, b, JT, Indirect);
        }

        // LB25: numeric expressions, pair-table approximation.
        for (b, a) in [
            (CL, PO), (CP, PO), (CL, PR), (CP, PR), (NU, PO), (NU, PR),
            (PO, OP), (PO, NU), (PR, OP), (PR, NU), (HY, NU), (IS, NU),
            (NU, NU), (SY, NU),
        ] {
            set(&mut cells, b, a, Indirect);
        }

        // LB24: prefix/postfix with letters.
        for b in [PR, PO] {
            for a in [AL, HL] {
                set(&mut cells, b, a, Indirect);
            }
        }
        for b in [AL, HL] {
            for a in [PR, PO] {
                set(&mut cells, b, a, Indirect);
            }
        }

        // LB23a: prefix before pictographs, pictographs before postfix.
        for a in [ID, EB, EM] {
            set(&mut cells, PR, a, Indirect);
        }
        for b in [ID, EB, EM] {
            set(&mut cells, b, PO, Indirect);
        }
        // The NS row must stay at least as prohibitive as the ID row:
        // strictness remaps CJ between NS and ID, and a cell where NS is
        // looser than ID would let a stricter level allow a break a looser
        // one prohibits.
        set(&mut cells, NS, PO, Indirect);

        // LB23: letters and digits.
        for b in [AL, HL] {
            set(&mut cells, b, NU, Indirect);
        }
        for a in [AL, HL] {
            set(&mut cells, NU, a, Indirect);
        }

        // LB22: no break before inseparables.
        set_col(&mut cells, IN, Indirect);

        // LB21b: solidus between Hebrew letters.
        set(&mut cells, SY, HL, Indirect);

        // LB21: no break before hyphens, break-after and nonstarters; no
        // break after break-before.
        set_col(&mut cells, BA, Indirect);
        set_col(&mut cells, HY, Indirect);
        set_col(&mut cells, NS, Indirect);
        set_row(&mut cells, BB, Indirect);

        // LB20: contingent breaks on both sides.
        set_row(&mut cells, CB, Direct);
        set_col(&mut cells, CB, Direct);

        // LB19: no break around quotation marks.
        set_col(&mut cells, QU, Indirect);
        set_row(&mut cells, QU, Indirect);

        // LB12a: no break before glue except after space, hyphen, BA.
        set_col(&mut cells, GL, Indirect);
        set(&mut cells, BA, GL, Direct);
        set(&mut cells, HY, GL, Direct);
        set(&mut cells, SP, GL, Direct);

        // LB12: no break after glue.
        set_row(&mut cells, GL, Indirect);

        // LB11: word joiner glues both sides, even across spaces.
        set_row(&mut cells, WJ, Indirect);
        set_col(&mut cells, WJ, Prohibited);

        // LB17: em-dash pairs hold together across spaces.
        set(&mut cells, B2, B2, Prohibited);

        // LB16: closing punctuation before nonstarters, across spaces.
        set(&mut cells, CL, NS, Prohibited);
        set(&mut cells, CP, NS, Prohibited);

        // LB15: quotation before open punctuation, across spaces.
        set(&mut cells, QU, OP, Prohibited);

        // LB14: nothing breaks right after an opener, spaces included.
        set_row(&mut cells, OP, Prohibited);

        // LB13: no break before closers, exclamation, infix separators and
        // symbols, spaces included.
        for a in [CL, CP, EX, IS, SY] {
            set_col(&mut cells, a, Prohibited);
        }

        PairTable { cells }
    }
}
