//! Static, hand-maintained property data.
//!
//! Sorted, non-overlapping `(first, last, class)` ranges consumed by the
//! binary-search lookups in [`crate::properties`]. Coverage is the scripts
//! and symbol blocks that actually influence line breaking; anything not
//! listed resolves to `Unknown` and from there, via LB1, to `Alphabetic`.
//! Hangul syllables (U+AC00..U+D7A3) are intentionally absent: they are
//! classified arithmetically.

use crate::properties::BreakClass::{
    self, After as BA, Alphabetic as AL, Ambiguous as AI, BeforeAndAfter as B2,
    CarriageReturn as CR, CloseParenthesis as CP, ClosePunctuation as CL, CombiningMark as CM,
    ComplexContext as SA, ConditionalJapaneseStarter as CJ, EmojiBase as EB, EmojiModifier as EM,
    Exclamation as EX, Glue as GL, HangulLJamo as JL, HangulTJamo as JT, HangulVJamo as JV,
    HebrewLetter as HL, Hyphen as HY, Ideographic as ID, InfixSeparator as IS, Inseparable as IN,
    LineFeed as LF, Mandatory as BK, NextLine as NL, NonStarter as NS, Numeric as NU,
    OpenPunctuation as OP, Postfix as PO, Prefix as PR, Quotation as QU, RegionalIndicator as RI,
    Space as SP, Surrogate as SG, Symbol as SY, WordJoiner as WJ, ZeroWidthJoiner as ZWJ,
    ZeroWidthSpace as ZW,
};
use crate::properties::WordBreakClass::{
    self, Ideographic as WID, Kana as WKA, Letter as WLE, Numeric as WNU,
};

#[rustfmt::skip]
pub(crate) static LINE_BREAK_RANGES: &[(u32, u32, BreakClass)] = &[
    (0x0000, 0x0008, CM),
    (0x0009, 0x0009, BA),
    (0x000A, 0x000A, LF),
    (0x000B, 0x000C, BK),
    (0x000D, 0x000D, CR),
    (0x000E, 0x001F, CM),
    (0x0020, 0x0020, SP),
    (0x0021, 0x0021, EX),
    (0x0022, 0x0022, QU),
    (0x0023, 0x0023, AL),
    (0x0024, 0x0024, PR),
    (0x0025, 0x0025, PO),
    (0x0026, 0x0026, AL),
    (0x0027, 0x0027, QU),
    (0x0028, 0x0028, OP),
    (0x0029, 0x0029, CP),
    (0x002A, 0x002A, AL),
    (0x002B, 0x002B, PR),
    (0x002C, 0x002C, IS),
    (0x002D, 0x002D, HY),
    (0x002E, 0x002E, IS),
    (0x002F, 0x002F, SY),
    (0x0030, 0x0039, NU),
    (0x003A, 0x003B, IS),
    (0x003C, 0x003E, AL),
    (0x003F, 0x003F, EX),
    (0x0040, 0x005A, AL),
    (0x005B, 0x005B, OP),
    (0x005C, 0x005C, PR),
    (0x005D, 0x005D, CP),
    (0x005E, 0x007A, AL),
    (0x007B, 0x007B, OP),
    (0x007C, 0x007C, BA),
    (0x007D, 0x007D, CL),
    (0x007E, 0x007E, AL),
    (0x007F, 0x0084, CM),
    (0x0085, 0x0085, NL),
    (0x0086, 0x009F, CM),
    (0x00A0, 0x00A0, GL),
    (0x00A1, 0x00A1, OP),
    (0x00A2, 0x00A2, PO),
    (0x00A3, 0x00A5, PR),
    (0x00A6, 0x00AA, AL),
    (0x00AB, 0x00AB, QU),
    (0x00AC, 0x00AC, AL),
    (0x00AD, 0x00AD, BA),
    (0x00AE, 0x00AF, AL),
    (0x00B0, 0x00B0, PO),
    (0x00B1, 0x00B1, PR),
    (0x00B2, 0x00BA, AL),
    (0x00BB, 0x00BB, QU),
    (0x00BC, 0x00BE, AL),
    (0x00BF, 0x00BF, OP),
    (0x00C0, 0x02FF, AL),
    (0x0300, 0x036F, CM),
    (0x0370, 0x0482, AL),
    (0x0483, 0x0489, CM),
    (0x048A, 0x0590, AL),
    (0x0591, 0x05BD, CM),
    (0x05BE, 0x05BE, BA),
    (0x05BF, 0x05BF, CM),
    (0x05C0, 0x05C0, AL),
    (0x05C1, 0x05C2, CM),
    (0x05C3, 0x05C3, AL),
    (0x05C4, 0x05C5, CM),
    (0x05C6, 0x05CF, AL),
    (0x05D0, 0x05F2, HL),
    (0x05F3, 0x060F, AL),
    (0x0610, 0x061A, CM),
    (0x061B, 0x064A, AL),
    (0x064B, 0x065F, CM),
    (0x0660, 0x0669, NU),
    (0x066A, 0x066A, PO),
    (0x066B, 0x066C, NU),
    (0x066D, 0x066F, AL),
    (0x0670, 0x0670, CM),
    (0x0671, 0x06D5, AL),
    (0x06D6, 0x06DC, CM),
    (0x06DD, 0x06DE, AL),
    (0x06DF, 0x06E4, CM),
    (0x06E5, 0x06E6, AL),
    (0x06E7, 0x06E8, CM),
    (0x06E9, 0x06E9, AL),
    (0x06EA, 0x06ED, CM),
    (0x06EE, 0x06EF, AL),
    (0x06F0, 0x06F9, NU),
    (0x06FA, 0x08FF, AL),
    (0x0900, 0x0903, CM),
    (0x0904, 0x093B, AL),
    (0x093C, 0x093C, CM),
    (0x093D, 0x093D, AL),
    (0x093E, 0x094F, CM),
    (0x0950, 0x0950, AL),
    (0x0951, 0x0957, CM),
    (0x0958, 0x0961, AL),
    (0x0962, 0x0963, CM),
    (0x0964, 0x0965, BA),
    (0x0966, 0x096F, NU),
    (0x0970, 0x0DFF, AL),
    (0x0E01, 0x0E3A, SA),
    (0x0E3F, 0x0E3F, PR),
    (0x0E40, 0x0E4E, SA),
    (0x0E4F, 0x0E4F, AL),
    (0x0E50, 0x0E59, NU),
    (0x0E5A, 0x0E5B, BA),
    (0x0E81, 0x0ECF, SA),
    (0x0ED0, 0x0ED9, NU),
    (0x0EDA, 0x0EDF, SA),
    (0x0F00, 0x0FFF, AL),
    (0x1000, 0x103F, SA),
    (0x1040, 0x1049, NU),
    (0x104A, 0x104B, BA),
    (0x104C, 0x109F, SA),
    (0x10A0, 0x10FF, AL),
    (0x1100, 0x115F, JL),
    (0x1160, 0x11A7, JV),
    (0x11A8, 0x11FF, JT),
    (0x1200, 0x135F, AL),
    (0x1360, 0x1368, BA),
    (0x1369, 0x167F, AL),
    (0x1680, 0x1680, BA),
    (0x1681, 0x177F, AL),
    (0x1780, 0x17D3, SA),
    (0x17D4, 0x17DA, BA),
    (0x17DB, 0x17DB, PR),
    (0x17DC, 0x17DD, SA),
    (0x17E0, 0x17E9, NU),
    (0x17F0, 0x1AAF, AL),
    (0x1AB0, 0x1AFF, CM),
    (0x1B00, 0x1DBF, AL),
    (0x1DC0, 0x1DFF, CM),
    (0x1E00, 0x1FFF, AL),
    (0x2000, 0x2006, BA),
    (0x2007, 0x2007, GL),
    (0x2008, 0x200A, BA),
    (0x200B, 0x200B, ZW),
    (0x200C, 0x200C, CM),
    (0x200D, 0x200D, ZWJ),
    (0x200E, 0x200F, CM),
    (0x2010, 0x2010, BA),
    (0x2011, 0x2011, GL),
    (0x2012, 0x2013, BA),
    (0x2014, 0x2014, B2),
    (0x2015, 0x2016, AI),
    (0x2017, 0x2017, AL),
    (0x2018, 0x2019, QU),
    (0x201A, 0x201A, OP),
    (0x201B, 0x201D, QU),
    (0x201E, 0x201E, OP),
    (0x201F, 0x201F, QU),
    (0x2020, 0x2023, AI),
    (0x2024, 0x2026, IN),
    (0x2027, 0x2027, BA),
    (0x2028, 0x2029, BK),
    (0x202A, 0x202E, CM),
    (0x202F, 0x202F, GL),
    (0x2030, 0x2037, PO),
    (0x2038, 0x2038, AL),
    (0x2039, 0x203A, QU),
    (0x203B, 0x203B, AI),
    (0x203C, 0x203D, NS),
    (0x203E, 0x2043, AL),
    (0x2044, 0x2044, IS),
    (0x2045, 0x2045, OP),
    (0x2046, 0x2046, CL),
    (0x2047, 0x2049, NS),
    (0x204A, 0x2055, AL),
    (0x2056, 0x2056, BA),
    (0x2057, 0x2057, AL),
    (0x2058, 0x205B, BA),
    (0x205C, 0x205C, AL),
    (0x205D, 0x205F, BA),
    (0x2060, 0x2060, WJ),
    (0x2061, 0x2064, AL),
    (0x2066, 0x206F, CM),
    (0x2070, 0x207C, AL),
    (0x207D, 0x207D, OP),
    (0x207E, 0x207E, CL),
    (0x207F, 0x208C, AL),
    (0x208D, 0x208D, OP),
    (0x208E, 0x208E, CL),
    (0x2090, 0x209F, AL),
    (0x20A0, 0x20CF, PR),
    (0x20D0, 0x20F0, CM),
    (0x2100, 0x2102, AL),
    (0x2103, 0x2103, PO),
    (0x2104, 0x2108, AL),
    (0x2109, 0x2109, PO),
    (0x210A, 0x2115, AL),
    (0x2116, 0x2116, PR),
    (0x2117, 0x2211, AL),
    (0x2212, 0x2213, PR),
    (0x2214, 0x2307, AL),
    (0x2308, 0x2308, OP),
    (0x2309, 0x2309, CL),
    (0x230A, 0x230A, OP),
    (0x230B, 0x230B, CL),
    (0x230C, 0x2329, AL),
    (0x232A, 0x232A, CL),
    (0x232B, 0x2767, AL),
    (0x2768, 0x2768, OP),
    (0x2769, 0x2769, CL),
    (0x276A, 0x276A, OP),
    (0x276B, 0x276B, CL),
    (0x276C, 0x276C, OP),
    (0x276D, 0x276D, CL),
    (0x276E, 0x276E, OP),
    (0x276F, 0x276F, CL),
    (0x2770, 0x2770, OP),
    (0x2771, 0x2771, CL),
    (0x2772, 0x2772, OP),
    (0x2773, 0x2773, CL),
    (0x2774, 0x2774, OP),
    (0x2775, 0x2775, CL),
    (0x2776, 0x27E5, AL),
    (0x27E6, 0x27E6, OP),
    (0x27E7, 0x27E7, CL),
    (0x27E8, 0x27E8, OP),
    (0x27E9, 0x27E9, CL),
    (0x27EA, 0x27EA, OP),
    (0x27EB, 0x27EB, CL),
    (0x27EC, 0x27EC, OP),
    (0x27ED, 0x27ED, CL),
    (0x27EE, 0x27EE, OP),
    (0x27EF, 0x27EF, CL),
    (0x27F0, 0x2E7F, AL),
    (0x2E80, 0x2FFF, ID),
    (0x3000, 0x3000, BA),
    (0x3001, 0x3002, CL),
    (0x3003, 0x3004, ID),
    (0x3005, 0x3005, NS),
    (0x3006, 0x3007, ID),
    (0x3008, 0x3008, OP),
    (0x3009, 0x3009, CL),
    (0x300A, 0x300A, OP),
    (0x300B, 0x300B, CL),
    (0x300C, 0x300C, OP),
    (0x300D, 0x300D, CL),
    (0x300E, 0x300E, OP),
    (0x300F, 0x300F, CL),
    (0x3010, 0x3010, OP),
    (0x3011, 0x3011, CL),
    (0x3012, 0x3013, ID),
    (0x3014, 0x3014, OP),
    (0x3015, 0x3015, CL),
    (0x3016, 0x3016, OP),
    (0x3017, 0x3017, CL),
    (0x3018, 0x3018, OP),
    (0x3019, 0x3019, CL),
    (0x301A, 0x301A, OP),
    (0x301B, 0x301B, CL),
    (0x301C, 0x301C, NS),
    (0x301D, 0x301D, OP),
    (0x301E, 0x301F, CL),
    (0x3020, 0x3029, ID),
    (0x302A, 0x302F, CM),
    (0x3030, 0x303A, ID),
    (0x303B, 0x303C, NS),
    (0x303D, 0x303F, ID),
    (0x3041, 0x3041, CJ),
    (0x3042, 0x3042, ID),
    (0x3043, 0x3043, CJ),
    (0x3044, 0x3044, ID),
    (0x3045, 0x3045, CJ),
    (0x3046, 0x3046, ID),
    (0x3047, 0x3047, CJ),
    (0x3048, 0x3048, ID),
    (0x3049, 0x3049, CJ),
    (0x304A, 0x3062, ID),
    (0x3063, 0x3063, CJ),
    (0x3064, 0x3082, ID),
    (0x3083, 0x3083, CJ),
    (0x3084, 0x3084, ID),
    (0x3085, 0x3085, CJ),
    (0x3086, 0x3086, ID),
    (0x3087, 0x3087, CJ),
    (0x3088, 0x308D, ID),
    (0x308E, 0x308E, CJ),
    (0x308F, 0x3094, ID),
    (0x3095, 0x3096, CJ),
    (0x3099, 0x309A, CM),
    (0x309B, 0x309E, NS),
    (0x309F, 0x309F, ID),
    (0x30A0, 0x30A0, NS),
    (0x30A1, 0x30A1, CJ),
    (0x30A2, 0x30A2, ID),
    (0x30A3, 0x30A3, CJ),
    (0x30A4, 0x30A4, ID),
    (0x30A5, 0x30A5, CJ),
    (0x30A6, 0x30A6, ID),
    (0x30A7, 0x30A7, CJ),
    (0x30A8, 0x30A8, ID),
    (0x30A9, 0x30A9, CJ),
    (0x30AA, 0x30C2, ID),
    (0x30C3, 0x30C3, CJ),
    (0x30C4, 0x30E2, ID),
    (0x30E3, 0x30E3, CJ),
    (0x30E4, 0x30E4, ID),
    (0x30E5, 0x30E5, CJ),
    (0x30E6, 0x30E6, ID),
    (0x30E7, 0x30E7, CJ),
    (0x30E8, 0x30ED, ID),
    (0x30EE, 0x30EE, CJ),
    (0x30EF, 0x30F4, ID),
    (0x30F5, 0x30F6, CJ),
    (0x30F7, 0x30FA, ID),
    (0x30FB, 0x30FB, NS),
    (0x30FC, 0x30FC, CJ),
    (0x30FD, 0x30FE, NS),
    (0x30FF, 0x30FF, ID),
    (0x3105, 0x31EF, ID),
    (0x31F0, 0x31FF, CJ),
    (0x3200, 0x4DBF, ID),
    (0x4E00, 0x9FFF, ID),
    (0xA000, 0xA4CF, ID),
    (0xA4D0, 0xA95F, AL),
    (0xA960, 0xA97F, JL),
    (0xA980, 0xABFF, AL),
    (0xD7B0, 0xD7C6, JV),
    (0xD7CB, 0xD7FB, JT),
    (0xD800, 0xDFFF, SG),
    (0xE000, 0xF8FF, AI),
    (0xF900, 0xFAFF, ID),
    (0xFB00, 0xFB1C, AL),
    (0xFB1D, 0xFB4F, HL),
    (0xFB50, 0xFDFF, AL),
    (0xFE00, 0xFE0F, CM),
    (0xFE10, 0xFE10, IS),
    (0xFE11, 0xFE12, CL),
    (0xFE13, 0xFE14, IS),
    (0xFE15, 0xFE16, EX),
    (0xFE17, 0xFE17, OP),
    (0xFE18, 0xFE18, CL),
    (0xFE19, 0xFE19, IN),
    (0xFE20, 0xFE2F, CM),
    (0xFE30, 0xFE34, ID),
    (0xFE35, 0xFE35, OP),
    (0xFE36, 0xFE36, CL),
    (0xFE37, 0xFE37, OP),
    (0xFE38, 0xFE38, CL),
    (0xFE39, 0xFE39, OP),
    (0xFE3A, 0xFE3A, CL),
    (0xFE3B, 0xFE3B, OP),
    (0xFE3C, 0xFE3C, CL),
    (0xFE3D, 0xFE3D, OP),
    (0xFE3E, 0xFE3E, CL),
    (0xFE3F, 0xFE3F, OP),
    (0xFE40, 0xFE40, CL),
    (0xFE41, 0xFE41, OP),
    (0xFE42, 0xFE42, CL),
    (0xFE43, 0xFE43, OP),
    (0xFE44, 0xFE44, CL),
    (0xFE45, 0xFE46, ID),
    (0xFE47, 0xFE47, OP),
    (0xFE48, 0xFE48, CL),
    (0xFE49, 0xFE4F, ID),
    (0xFE50, 0xFE52, CL),
    (0xFE54, 0xFE55, NS),
    (0xFE56, 0xFE57, EX),
    (0xFE58, 0xFE58, ID),
    (0xFE59, 0xFE59, OP),
    (0xFE5A, 0xFE5A, CL),
    (0xFE5B, 0xFE5B, OP),
    (0xFE5C, 0xFE5C, CL),
    (0xFE5D, 0xFE5D, OP),
    (0xFE5E, 0xFE5E, CL),
    (0xFE5F, 0xFE66, ID),
    (0xFE68, 0xFE68, ID),
    (0xFE69, 0xFE69, PR),
    (0xFE6A, 0xFE6A, PO),
    (0xFE6B, 0xFE6B, ID),
    (0xFE70, 0xFEFE, AL),
    (0xFEFF, 0xFEFF, WJ),
    (0xFF01, 0xFF01, EX),
    (0xFF02, 0xFF03, ID),
    (0xFF04, 0xFF04, PR),
    (0xFF05, 0xFF05, PO),
    (0xFF06, 0xFF07, ID),
    (0xFF08, 0xFF08, OP),
    (0xFF09, 0xFF09, CL),
    (0xFF0A, 0xFF0B, ID),
    (0xFF0C, 0xFF0C, CL),
    (0xFF0D, 0xFF0D, ID),
    (0xFF0E, 0xFF0E, CL),
    (0xFF0F, 0xFF19, ID),
    (0xFF1A, 0xFF1B, NS),
    (0xFF1C, 0xFF1E, ID),
    (0xFF1F, 0xFF1F, EX),
    (0xFF20, 0xFF3A, ID),
    (0xFF3B, 0xFF3B, OP),
    (0xFF3C, 0xFF3C, ID),
    (0xFF3D, 0xFF3D, CL),
    (0xFF3E, 0xFF5A, ID),
    (0xFF5B, 0xFF5B, OP),
    (0xFF5C, 0xFF5C, ID),
    (0xFF5D, 0xFF5D, CL),
    (0xFF5E, 0xFF5E, ID),
    (0xFF5F, 0xFF5F, OP),
    (0xFF60, 0xFF61, CL),
    (0xFF62, 0xFF62, OP),
    (0xFF63, 0xFF64, CL),
    (0xFF65, 0xFF65, NS),
    (0xFF66, 0xFFDC, AL),
    (0xFFE0, 0xFFE0, PO),
    (0xFFE1, 0xFFE1, PR),
    (0xFFE2, 0xFFE4, AL),
    (0xFFE5, 0xFFE6, PR),
    (0xFFE7, 0xFFEF, AL),
    (0x10000, 0x16FFF, AL),
    (0x17000, 0x18AFF, ID),
    (0x18B00, 0x1AFFF, AL),
    (0x1B000, 0x1B2FF, ID),
    (0x1B300, 0x1F0FF, AL),
    (0x1F100, 0x1F1E5, AL),
    (0x1F1E6, 0x1F1FF, RI),
    (0x1F200, 0x1F384, ID),
    (0x1F385, 0x1F385, EB),
    (0x1F386, 0x1F3C1, ID),
    (0x1F3C2, 0x1F3C4, EB),
    (0x1F3C5, 0x1F3C6, ID),
    (0x1F3C7, 0x1F3C7, EB),
    (0x1F3C8, 0x1F3C9, ID),
    (0x1F3CA, 0x1F3CC, EB),
    (0x1F3CD, 0x1F3FA, ID),
    (0x1F3FB, 0x1F3FF, EM),
    (0x1F400, 0x1F441, ID),
    (0x1F442, 0x1F443, EB),
    (0x1F444, 0x1F445, ID),
    (0x1F446, 0x1F450, EB),
    (0x1F451, 0x1F465, ID),
    (0x1F466, 0x1F478, EB),
    (0x1F479, 0x1F47B, ID),
    (0x1F47C, 0x1F47C, EB),
    (0x1F47D, 0x1F480, ID),
    (0x1F481, 0x1F483, EB),
    (0x1F484, 0x1F484, ID),
    (0x1F485, 0x1F487, EB),
    (0x1F488, 0x1F4A9, ID),
    (0x1F4AA, 0x1F4AA, EB),
    (0x1F4AB, 0x1F573, ID),
    (0x1F574, 0x1F575, EB),
    (0x1F576, 0x1F58F, ID),
    (0x1F590, 0x1F590, EB),
    (0x1F591, 0x1F594, ID),
    (0x1F595, 0x1F596, EB),
    (0x1F597, 0x1F644, ID),
    (0x1F645, 0x1F647, EB),
    (0x1F648, 0x1F64A, ID),
    (0x1F64B, 0x1F64F, EB),
    (0x1F650, 0x1F6A2, ID),
    (0x1F6A3, 0x1F6A3, EB),
    (0x1F6A4, 0x1F6B3, ID),
    (0x1F6B4, 0x1F6B6, EB),
    (0x1F6B7, 0x1F6BF, ID),
    (0x1F6C0, 0x1F6C0, EB),
    (0x1F6C1, 0x1F917, ID),
    (0x1F918, 0x1F91F, EB),
    (0x1F920, 0x1F925, ID),
    (0x1F926, 0x1F926, EB),
    (0x1F927, 0x1F92F, ID),
    (0x1F930, 0x1F939, EB),
    (0x1F93A, 0x1F93B, ID),
    (0x1F93C, 0x1F93E, EB),
    (0x1F93F, 0x1F9B4, ID),
    (0x1F9B5, 0x1F9B6, EB),
    (0x1F9B7, 0x1F9B7, ID),
    (0x1F9B8, 0x1F9B9, EB),
    (0x1F9BA, 0x1F9CC, ID),
    (0x1F9CD, 0x1F9DD, EB),
    (0x1F9DE, 0x1FAFF, ID),
    (0x20000, 0x2FFFD, ID),
    (0x30000, 0x3FFFD, ID),
];

#[rustfmt::skip]
pub(crate) static WORD_BREAK_RANGES: &[(u32, u32, WordBreakClass)] = &[
    (0x0030, 0x0039, WNU),
    (0x0041, 0x005A, WLE),
    (0x0061, 0x007A, WLE),
    (0x00C0, 0x02AF, WLE),
    (0x0370, 0x04FF, WLE),
    (0x0531, 0x058F, WLE),
    (0x05D0, 0x05F2, WLE),
    (0x0620, 0x064A, WLE),
    (0x0660, 0x0669, WNU),
    (0x06F0, 0x06F9, WNU),
    (0x0966, 0x096F, WNU),
    (0x1100, 0x11FF, WLE),
    (0x3041, 0x3096, WKA),
    (0x309D, 0x309F, WKA),
    (0x30A1, 0x30FA, WKA),
    (0x30FC, 0x30FF, WKA),
    (0x31F0, 0x31FF, WKA),
    (0x3400, 0x4DBF, WID),
    (0x4E00, 0x9FFF, WID),
    (0xA960, 0xA97F, WLE),
    (0xF900, 0xFAFF, WID),
    (0xFF10, 0xFF19, WNU),
    (0xFF21, 0xFF3A, WLE),
    (0xFF41, 0xFF5A, WLE),
    (0x20000, 0x2FFFD, WID),
];
