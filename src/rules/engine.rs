use super::{capture, fixed, mapped, rule};
use crate::ir::Field::{Name, Version};
use crate::ir::Rule;
use crate::normalize::ENGINE_NAMES;
use std::sync::Arc;

pub(super) fn rules() -> Vec<Arc<Rule>> {
    vec![
        rule(
            &[r"windows.+ edge/([\w.]+)"],
            vec![capture(Version), fixed(Name, "EdgeHTML")],
        ),
        // Chrome 27 still shipped WebKit with the 537.36 token.
        rule(
            &[r"webkit/(537\.36).+chrome/27\."],
            vec![capture(Version), fixed(Name, "WebKit")],
        ),
        rule(
            &[r"webkit/537\.36.+chrome/([\w.]+)"],
            vec![capture(Version), fixed(Name, "Blink")],
        ),
        rule(
            &[
                r"(presto)/([\w.]+)",
                r"(webkit|trident|netfront|netsurf|amaya|lynx|w3m|goanna|servo)/([\w.]+)",
                r"ekioh(flow)/([\w.]+)",
                r"(khtml|tasman|links)[/ ]\(?([\w.]+)",
                r"(icab)[/ ]([23]\.[\d.]+)",
                r"\b(libweb)",
            ],
            vec![mapped(Name, &ENGINE_NAMES), capture(Version)],
        ),
        rule(
            &[r"rv:([\w.]{1,9})\b.+(gecko)"],
            vec![capture(Version), mapped(Name, &ENGINE_NAMES)],
        ),
    ]
}
