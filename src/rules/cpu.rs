use super::{fixed, lowercase, rule};
use crate::ir::Field::Architecture;
use crate::ir::Rule;
use std::sync::Arc;

pub(super) fn rules() -> Vec<Arc<Rule>> {
    vec![
        rule(
            &[r"\b((?:amd|x|x86[-_]?|wow|win)64)\b"],
            vec![fixed(Architecture, "amd64")],
        ),
        rule(
            &[r"\b(ia32);", r"\b((?:i[346]|x)86)(?:pc)?\b"],
            vec![fixed(Architecture, "ia32")],
        ),
        rule(
            &[r"\b(aarch64|arm(?:v?8e?l?|_?64))\b"],
            vec![fixed(Architecture, "arm64")],
        ),
        rule(
            &[r"\b(arm(?:v[67])?ht?n?[fl]p?)\b"],
            vec![fixed(Architecture, "armhf")],
        ),
        // Windows CE / Mobile on PPC devices actually run ARM.
        rule(
            &[r"( (?:ce|mobile); ppc;|/[\w.]+arm\b)"],
            vec![fixed(Architecture, "arm")],
        ),
        rule(
            &[r"((?:ppc|powerpc)64)\b"],
            vec![fixed(Architecture, "ppc64")],
        ),
        rule(
            &[r"(?:mac_)?(?:ppc|powerpc)\b"],
            vec![fixed(Architecture, "ppc")],
        ),
        rule(&[r"\b(sun4\w)[;)]"], vec![fixed(Architecture, "sparc")]),
        rule(
            &[
                r"\b(avr32)",
                r"\b(ia64)[;)]",
                r"\b(68k)\)",
                r"\b(arm)(?:v(?:[1-7]|[5-7]1)l?|;|eabi)",
                r"atmel (avr)",
                r"\b((?:irix|mips|sparc)(?:64)?)\b",
                r"\b(pa-risc)",
            ],
            vec![lowercase(Architecture)],
        ),
    ]
}
