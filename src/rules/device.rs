use super::{capture, fixed, mapped, rule};
use crate::ir::Field::{Model, Type, Vendor};
use crate::ir::Rule;
use crate::model::device_type::{CONSOLE, EMBEDDED, MOBILE, SMARTTV, TABLET, WEARABLE, XR};
use crate::normalize::DEVICE_VENDORS;
use std::sync::Arc;

pub(super) fn rules() -> Vec<Arc<Rule>> {
    vec![
        // Nokia Windows Phones also claim iPhone and Android compatibility.
        rule(
            &[r"\b(nokia)[;_ -]+(lumia \d+|n900)"],
            vec![mapped(Vendor, &DEVICE_VENDORS), capture(Model), fixed(Type, MOBILE)],
        ),
        rule(
            &[r"\b(nokia)[-_ ]?([-\w.]*)"],
            vec![mapped(Vendor, &DEVICE_VENDORS), capture(Model), fixed(Type, MOBILE)],
        ),
        // Smart TVs that would otherwise be taken for phones
        rule(
            &[r"\b(?:hbbtv|smart-tv).+(samsung)"],
            vec![mapped(Vendor, &DEVICE_VENDORS), fixed(Type, SMARTTV)],
        ),
        rule(
            &[r"\b(lg) ?netcast\.tv"],
            vec![mapped(Vendor, &DEVICE_VENDORS), fixed(Type, SMARTTV)],
        ),
        // Samsung
        rule(
            &[r"\b(sch-i[89]0\d|shw-m380s|sm-[ptx]\w{2,4}|gt-[pn]\d{2,4}|sgh-t8[56]9|nexus 10)"],
            vec![capture(Model), fixed(Vendor, "Samsung"), fixed(Type, TABLET)],
        ),
        rule(
            &[
                r"\b((?:s[cgp]h|gt|sm)-[a-km-qs-z0-9]\w*|galaxy nexus)",
                r"\bsamsung[- ]([-\w]+)",
                r"\bsec-(sgh\w+)",
            ],
            vec![capture(Model), fixed(Vendor, "Samsung"), fixed(Type, MOBILE)],
        ),
        // Apple
        rule(
            &[r"\((ip(?:hone|od)[\w ]*);"],
            vec![capture(Model), fixed(Vendor, "Apple"), fixed(Type, MOBILE)],
        ),
        rule(
            &[
                r"\((ipad);[-\w),; ]+apple",
                r"applecoremedia/[\w.]+ \((ipad)",
                r"\b(ipad)\d\d?,\d\d?[;\]].+ios",
            ],
            vec![capture(Model), fixed(Vendor, "Apple"), fixed(Type, TABLET)],
        ),
        rule(
            &[r"\b(apple ?tv)\b"],
            vec![fixed(Model, "Apple TV"), fixed(Vendor, "Apple"), fixed(Type, SMARTTV)],
        ),
        rule(
            &[r"\b(watch)(?: ?os[,/]|\d,\d/)[\d.]+"],
            vec![capture(Model), fixed(Vendor, "Apple"), fixed(Type, WEARABLE)],
        ),
        rule(
            &[r"(macintosh);"],
            vec![capture(Model), fixed(Vendor, "Apple")],
        ),
        // Huawei
        rule(
            &[r"\b((?:ag[rs][23]?|bah2?|sht?|btv)-a?[lw]\d{2})\b"],
            vec![capture(Model), fixed(Vendor, "Huawei"), fixed(Type, TABLET)],
        ),
        rule(
            &[
                r"(?:huawei|honor)[-_ ]?([-\w ]+)[;)]",
                r"\b(nexus 6p|\w{2,4}e?-[atu]?[ln][\dx][012359c][adn]?)\b",
            ],
            vec![capture(Model), fixed(Vendor, "Huawei"), fixed(Type, MOBILE)],
        ),
        // Xiaomi tablets before phones
        rule(
            &[r"\b((?:xiaomi[_ ])?mi[- ]?pad[\w ]*)(?: bui|\))"],
            vec![capture(Model), fixed(Vendor, "Xiaomi"), fixed(Type, TABLET)],
        ),
        rule(
            &[
                r"\b(poco[\w ]+|m2\d{3}j\d\d[a-z]{2})(?: bui|\))",
                r"\b(redmi[-_ ]?[\w ]+)(?: bui|\))",
                r"\b(mi[-_ ]?(?:a\d|one|max|cc)?[_ ]?\d?\w?[_ ]?(?:plus|se|lite|pro)?)(?: bui|\))",
            ],
            vec![capture(Model), fixed(Vendor, "Xiaomi"), fixed(Type, MOBILE)],
        ),
        // Google
        rule(
            &[r"droid.+; (pixel c)\b"],
            vec![capture(Model), fixed(Vendor, "Google"), fixed(Type, TABLET)],
        ),
        rule(
            &[r"droid.+; (pixel[\daxl ]{0,6})(?: bui|\))"],
            vec![capture(Model), fixed(Vendor, "Google"), fixed(Type, MOBILE)],
        ),
        // Sony
        rule(
            &[r"droid.+; ([c-g]\d{4}|so[-gl]\w+|xq-a\w[4-7][12]) bui"],
            vec![capture(Model), fixed(Vendor, "Sony"), fixed(Type, MOBILE)],
        ),
        rule(
            &[r"\b(?:sony)?sgp\w+(?: bui|\))", r"sony tablet [ps]"],
            vec![fixed(Model, "Xperia Tablet"), fixed(Vendor, "Sony"), fixed(Type, TABLET)],
        ),
        // HTC
        rule(
            &[r"\b(nexus 9)\b"],
            vec![capture(Model), fixed(Vendor, "HTC"), fixed(Type, TABLET)],
        ),
        rule(
            &[r"\b(htc)[-;_ ]{1,2}(\w+)"],
            vec![mapped(Vendor, &DEVICE_VENDORS), capture(Model), fixed(Type, MOBILE)],
        ),
        // LG
        rule(
            &[r"\blg[-e;/ ]+(\w+)", r"\blg-?([\d\w]+) bui"],
            vec![capture(Model), fixed(Vendor, "LG"), fixed(Type, MOBILE)],
        ),
        // Motorola
        rule(
            &[r"\b(mz60\d|xoom[2 ]{0,2}) build/"],
            vec![capture(Model), fixed(Vendor, "Motorola"), fixed(Type, TABLET)],
        ),
        rule(
            &[
                r"\b(milestone|droid(?:[2-4x]| (?:bionic|x2|pro|razr))?:?( 4g)?)\b[\w ]+build/",
                r"\bmot(?:orola)?[- ](\w*)",
            ],
            vec![capture(Model), fixed(Vendor, "Motorola"), fixed(Type, MOBILE)],
        ),
        // Amazon
        rule(
            &[r"\b(kf[a-z]{2}wi)(?: bui|\))", r"\b(kindle)/[\w.]+"],
            vec![capture(Model), fixed(Vendor, "Amazon"), fixed(Type, TABLET)],
        ),
        rule(
            &[r"\b(aft\w*)(?: bui|\))"],
            vec![capture(Model), fixed(Vendor, "Amazon"), fixed(Type, SMARTTV)],
        ),
        rule(
            &[r"\b(aeobc)\b"],
            vec![capture(Model), fixed(Vendor, "Amazon"), fixed(Type, EMBEDDED)],
        ),
        // BlackBerry
        rule(
            &[r"\b(playbook);"],
            vec![capture(Model), fixed(Vendor, "BlackBerry"), fixed(Type, TABLET)],
        ),
        rule(
            &[r"\b(blackberry)[-_ ]?(\w+)"],
            vec![mapped(Vendor, &DEVICE_VENDORS), capture(Model), fixed(Type, MOBILE)],
        ),
        rule(
            &[r"\b((?:bb[a-f]|st[hv])100-\d)"],
            vec![capture(Model), fixed(Vendor, "BlackBerry"), fixed(Type, MOBILE)],
        ),
        // Consoles
        rule(
            &[r"\b(playstation [345portablevi]+)"],
            vec![capture(Model), fixed(Vendor, "Sony"), fixed(Type, CONSOLE)],
        ),
        rule(
            &[r"\b(xbox one)\b", r"\b(xbox)[); ]"],
            vec![capture(Model), fixed(Vendor, "Microsoft"), fixed(Type, CONSOLE)],
        ),
        rule(
            &[r"\b(nintendo) ([wids3utch]+)"],
            vec![mapped(Vendor, &DEVICE_VENDORS), capture(Model), fixed(Type, CONSOLE)],
        ),
        rule(
            &[r"droid.+; (shield) bui"],
            vec![capture(Model), fixed(Vendor, "Nvidia"), fixed(Type, CONSOLE)],
        ),
        // Smart TVs
        rule(
            &[r"\b(roku)[\dx]*[)/]((?:dvp-)?[\d.]*)"],
            vec![mapped(Vendor, &DEVICE_VENDORS), capture(Model), fixed(Type, SMARTTV)],
        ),
        rule(
            &[r"\bcrkey\b"],
            vec![fixed(Model, "Chromecast"), fixed(Vendor, "Google"), fixed(Type, SMARTTV)],
        ),
        rule(
            &[r"\b(aquos-tv[\w ]+)\)"],
            vec![capture(Model), fixed(Vendor, "Sharp"), fixed(Type, SMARTTV)],
        ),
        rule(
            &[r"\b(?:smart-tv|smarttv|hbbtv|google tv|android tv)\b", r"\btv;"],
            vec![fixed(Type, SMARTTV)],
        ),
        // Wearables
        rule(
            &[r"((pebble))app"],
            vec![mapped(Vendor, &DEVICE_VENDORS), capture(Model), fixed(Type, WEARABLE)],
        ),
        rule(
            &[r"droid.+; (glass) \d"],
            vec![capture(Model), fixed(Vendor, "Google"), fixed(Type, WEARABLE)],
        ),
        rule(
            &[r"droid.+; (wt63?0{2,3})\)"],
            vec![capture(Model), fixed(Vendor, "Zebra"), fixed(Type, WEARABLE)],
        ),
        // XR
        rule(
            &[r"\b(quest(?: \d| pro)?)\b"],
            vec![capture(Model), fixed(Vendor, "Facebook"), fixed(Type, XR)],
        ),
        rule(
            &[r"\b(pico) (4|neo3(?: link|pro)?)"],
            vec![capture(Vendor), capture(Model), fixed(Type, XR)],
        ),
        // Embedded
        rule(
            &[r"(tesla)(?: qtcarbrowser|/[-\w.]+)"],
            vec![mapped(Vendor, &DEVICE_VENDORS), fixed(Type, EMBEDDED)],
        ),
        // Generic fallbacks, most specific first
        rule(
            &[r"droid .+?; ([^;]+?)(?: bui|\) applew).+? mobile safari"],
            vec![capture(Model), fixed(Type, MOBILE)],
        ),
        rule(
            &[r"droid .+?; ([^;]+?)(?: bui|\) applew).+? safari"],
            vec![capture(Model), fixed(Type, TABLET)],
        ),
        rule(&[r"\b(?:tablet|tab)[;/]"], vec![fixed(Type, TABLET)]),
        rule(
            &[r"(?:phone|mobile(?:[;/]| safari)|pda)"],
            vec![fixed(Type, MOBILE)],
        ),
        rule(
            &[r"(android[-\w. ]{0,9});.+buil"],
            vec![capture(Model), fixed(Vendor, "Generic")],
        ),
    ]
}
