use super::{capture, fixed, mapped, replace, rule};
use crate::ir::Field::{Name, Version};
use crate::ir::Rule;
use crate::normalize::{OS_NAMES, WINDOWS_VERSIONS};
use std::sync::Arc;

pub(super) fn rules() -> Vec<Arc<Rule>> {
    vec![
        // Windows
        rule(
            &[r"microsoft (windows) (vista|xp)"],
            vec![capture(Name), capture(Version)],
        ),
        rule(
            &[r"(windows (?:phone(?: os)?|mobile|iot))[/ ]?([\d.\w ]*)"],
            vec![capture(Name), mapped(Version, &WINDOWS_VERSIONS)],
        ),
        rule(
            &[r"windows nt 6\.2; (arm);"],
            vec![mapped(Version, &WINDOWS_VERSIONS), fixed(Name, "Windows")],
        ),
        rule(
            &[r"(xbox); +xbox ([^);]+)"],
            vec![capture(Name), capture(Version)],
        ),
        rule(
            &[
                r"windows[/ ]?([ntce\d. ]+\w)",
                r"\bwin 9x ([nt\d.]+)",
                r"\bwin((?:3|9|n)[nt\d.]*)",
            ],
            vec![mapped(Version, &WINDOWS_VERSIONS), fixed(Name, "Windows")],
        ),
        // Apple
        rule(
            &[
                r"ip[honead]{2,4}\b.*os ([\w]+) like mac",
                r"ip[honead]{2,4}\b(?:; opera)",
                r"cfnetwork/.+darwin",
            ],
            vec![replace(Version, "_", "."), fixed(Name, "iOS")],
        ),
        rule(
            &[r"(mac os x) ?([\w. ]*)", r"(macintosh|mac_powerpc\b)"],
            vec![mapped(Name, &OS_NAMES), replace(Version, "_", ".")],
        ),
        // Mobile
        rule(
            &[r"droid ([\w.]+)\b.+(android[- ]x86|harmonyos)"],
            vec![capture(Version), capture(Name)],
        ),
        rule(
            &[
                r"(android|webos|web0s|qnx|bada|rim tablet os|maemo|meego|sailfish|kaios)[-/ ]?([\w.]*)",
                r"\b(blackberry)\w*/([\w.]*)",
                r"(tizen)[/ ]([\w.]+)",
            ],
            vec![mapped(Name, &OS_NAMES), capture(Version)],
        ),
        rule(
            &[r"\bbb10;.+version/([\w.]+)"],
            vec![capture(Version), fixed(Name, "BlackBerry")],
        ),
        rule(
            &[r"(?:symbian ?os|symbos|s60;|series ?60)[-/ ]?([\w.]*)"],
            vec![capture(Version), fixed(Name, "Symbian")],
        ),
        rule(
            &[r"mozilla/[\d.]+ \((?:mobile|tablet|tv|mobile; [\w ]+); rv:.+ gecko/([\w.]+)"],
            vec![capture(Version), fixed(Name, "Firefox OS")],
        ),
        // Consoles
        rule(
            &[r"(nintendo|playstation) ([wids345portablevuch]+)"],
            vec![capture(Name), capture(Version)],
        ),
        // Google
        rule(
            &[r"\b(cros) \w+(?:\)| ([\w.]+)\b)"],
            vec![mapped(Name, &OS_NAMES), capture(Version)],
        ),
        // Linux and other Unix-like systems
        rule(
            &[
                r"(mint)[/ (]?(\w*)",
                r"(mageia|vectorlinux)[; ]",
                r"([kxln]?ubuntu|debian|suse|opensuse|gentoo|arch linux|slackware|fedora|mandriva|centos|pclinuxos|red ?hat|zenwalk|linpus|raspbian|plan 9|minix|risc os|contiki|deepin|manjaro|elementary os|sabayon|linspire)(?: gnu/linux)?(?: enterprise)?(?:[- ]linux)?(?:-gnu)?[-/ ]?([-\w.]*)",
                r"(hurd|linux)(?: (?:arm|x86|ppc)\w*| ?)([\w.]*)",
                r"(gnu) ?([\w.]*)",
                r"\b([-frentopcghs]{0,5}bsd|dragonfly)[/ ]?([\w.]*)",
                r"(haiku) (\w+)",
            ],
            vec![mapped(Name, &OS_NAMES), capture(Version)],
        ),
        rule(
            &[
                r"(sunos) ?([\w.]*)",
                r"((?:open)?solaris)[-/ ]?([\w.]*)",
                r"(aix) ([\d.]*)",
                r"\b(beos|os/2|amigaos|morphos|openvms|fuchsia|hp-ux|serenityos)",
                r"(unix) ?([\w.]*)",
            ],
            vec![mapped(Name, &OS_NAMES), capture(Version)],
        ),
    ]
}
