use super::{capture, fixed, rule};
use crate::ir::Field::{Name, Type, Version};
use crate::ir::Rule;
use crate::model::browser_type::{CLI, CRAWLER, EMAIL, FETCHER, INAPP, LIBRARY, MEDIAPLAYER};
use std::sync::Arc;

pub(super) fn rules() -> Vec<Arc<Rule>> {
    vec![
        // Crawlers announce themselves next to a regular browser token.
        rule(
            &[r"\b((?:googlebot|bingbot|yandexbot|duckduckbot|applebot|baiduspider|slurp|petalbot|ahrefsbot|semrushbot)(?:-\w+)?)/?([\w.]*)"],
            vec![capture(Name), capture(Version), fixed(Type, CRAWLER)],
        ),
        rule(
            &[r"\b(facebookexternalhit|slackbot-linkexpanding|twitterbot|whatsapp)/([\w.]+)"],
            vec![capture(Name), capture(Version), fixed(Type, FETCHER)],
        ),
        rule(
            &[r"\b(?:crmo|crios)/([\w.]+)"],
            vec![capture(Version), fixed(Name, "Mobile Chrome")],
        ),
        rule(
            &[r"edg(?:e|ios|a)?/([\w.]+)"],
            vec![capture(Version), fixed(Name, "Edge")],
        ),
        // Presto-based Opera
        rule(
            &[
                r"(opera mini)/([-\w.]+)",
                r"(opera [mobiletab]{3,6})\b.+version/([-\w.]+)",
                r"(opera)(?:.+version/|[/ ]+)([\w.]+)",
            ],
            vec![capture(Name), capture(Version)],
        ),
        rule(
            &[r"opios[/ ]+([\w.]+)"],
            vec![capture(Version), fixed(Name, "Opera Mini")],
        ),
        rule(
            &[r"\bop(?:rg)?x/([\w.]+)"],
            vec![capture(Version), fixed(Name, "Opera GX")],
        ),
        rule(
            &[r"\bopr/([\w.]+)"],
            vec![capture(Version), fixed(Name, "Opera")],
        ),
        // IEMobile must precede the rv: based IE 11 rule below.
        rule(
            &[
                r"(kindle)/([\w.]+)",
                r"(lunascape|maxthon|netfront|jasmine|blazer|sleipnir)[/ ]?([\w.]*)",
                r"(avant|iemobile|slim(?:browser|boat|jet))[/ ]?([\d.]*)",
                r"(?:ms|\()(ie) ([\w.]+)",
            ],
            vec![capture(Name), capture(Version)],
        ),
        rule(
            &[r"(flock|rockmelt|midori|epiphany|silk|skyfire|ovibrowser|bolt|iron|vivaldi|iridium|phantomjs|bowser|qupzilla|falkon|rekonq|puffin|brave|whale|qqbrowserlite|duckduckgo|klar|helio|dragon)/([-\w.]+)"],
            vec![capture(Name), capture(Version)],
        ),
        rule(
            &[r"\byabrowser/([\w.]+)"],
            vec![capture(Version), fixed(Name, "Yandex")],
        ),
        rule(
            &[r"(?:ucbrowser|ucweb)[/ ]?([\w.]+)"],
            vec![capture(Version), fixed(Name, "UCBrowser")],
        ),
        rule(
            &[r"samsungbrowser/([\w.]+)"],
            vec![capture(Version), fixed(Name, "Samsung Internet")],
        ),
        // In-app browsers
        rule(
            &[r"\bfbav/([\w.]+);"],
            vec![capture(Version), fixed(Name, "Facebook"), fixed(Type, INAPP)],
        ),
        rule(
            &[r"\b(instagram|snapchat)[/ ]([-\w.]+)"],
            vec![capture(Name), capture(Version), fixed(Type, INAPP)],
        ),
        rule(
            &[r"trident.+rv[: ]([\w.]{1,9})\b.+like gecko"],
            vec![capture(Version), fixed(Name, "IE")],
        ),
        rule(
            &[r"headlesschrome(?:/([\w.]+)| )"],
            vec![capture(Version), fixed(Name, "Chrome Headless")],
        ),
        rule(
            &[r" wv\).+chrome/([\w.]+)"],
            vec![capture(Version), fixed(Name, "Chrome WebView")],
        ),
        rule(
            &[r"droid.+ version/([\w.]+)\b.+(?:mobile safari|safari)"],
            vec![capture(Version), fixed(Name, "Android Browser")],
        ),
        rule(
            &[r"(chrome|omniweb|arora|[tizenoka]{5} ?browser)/v?([\w.]+)"],
            vec![capture(Name), capture(Version)],
        ),
        rule(
            &[r"version/([\w.,]+) .*mobile/\w+ safari"],
            vec![capture(Version), fixed(Name, "Mobile Safari")],
        ),
        rule(
            &[r"iphone .*mobile(?:/\w+ | ?)safari"],
            vec![fixed(Name, "Mobile Safari")],
        ),
        rule(
            &[r"version/([\w.,]+) .*(mobile ?safari|safari)"],
            vec![capture(Version), capture(Name)],
        ),
        rule(
            &[r"webkit.+?(mobile ?safari|safari)/[\w.]+"],
            vec![capture(Name), fixed(Version, "1")],
        ),
        rule(
            &[r"(webkit|khtml)/([\w.]+)"],
            vec![capture(Name), capture(Version)],
        ),
        // Gecko family
        rule(
            &[r"(?:navigator|netscape\d?)/([-\w.]+)"],
            vec![fixed(Name, "Netscape"), capture(Version)],
        ),
        rule(
            &[r"mobile vr; rv:([\w.]+)\).+firefox"],
            vec![capture(Version), fixed(Name, "Firefox Reality")],
        ),
        rule(
            &[r"\b(thunderbird)/([\w.]+)"],
            vec![capture(Name), capture(Version), fixed(Type, EMAIL)],
        ),
        rule(
            &[
                r"ekiohf.+(flow)/([\w.]+)",
                r"(swiftfox)",
                r"(icedragon|iceweasel|camino|chimera|fennec|maemo browser|minimo|conkeror)[/ ]?([\w.+]+)",
                r"(seamonkey|k-meleon|icecat|iceape|firebird|phoenix|palemoon|basilisk|waterfox)/([-\w.]+)$",
                r"(firefox)/([\w.]+)",
                r"(mozilla)/([\w.]+) .+rv:.+gecko/\d+",
                r"(polaris|lynx|dillo|icab|doris|amaya|w3m|netsurf|obigo|mosaic|(?:go|ice|up)[. ]?browser)[-/ ]?v?([\w.]+)",
                r"(links) \(([\w.]+)",
            ],
            vec![capture(Name), capture(Version)],
        ),
        // Non-browser clients
        rule(
            &[r"\b(curl|wget|httpie|aria2)/([\w.]+)"],
            vec![capture(Name), capture(Version), fixed(Type, CLI)],
        ),
        rule(
            &[r"\b(python-requests|go-http-client|okhttp|axios|node-fetch|java)/([\w.]+)"],
            vec![capture(Name), capture(Version), fixed(Type, LIBRARY)],
        ),
        rule(
            &[r"\b(vlc|mpv|winamp)[/ ]([\w.]+)"],
            vec![capture(Name), capture(Version), fixed(Type, MEDIAPLAYER)],
        ),
    ]
}
