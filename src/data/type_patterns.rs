use crate::number::NumberType;

/// One classification rule: a national number in `region` matching
/// `pattern` in full is of `number_type`.
#[derive(Debug)]
pub struct TypePattern {
    pub region: &'static str,
    pub number_type: NumberType,
    pub pattern: &'static str,
}

const fn p(region: &'static str, number_type: NumberType, pattern: &'static str) -> TypePattern {
    TypePattern {
        region,
        number_type,
        pattern,
    }
}

/// Per-region line-type descriptors, checked in order; the first full
/// match wins, so narrow ranges (toll-free, premium, pager) must precede
/// the broad fixed-line and mobile rules. Regions without descriptors
/// classify as Unknown, which the metadata lookup reports as an expected
/// data gap rather than an error.
pub const TYPE_PATTERNS: &[TypePattern] = &[
    // NANPA: fixed and mobile ranges are indistinguishable by number shape.
    p("US", NumberType::TollFree, "8(?:00|33|44|55|66|77|88)[2-9]\\d{6}"),
    p("US", NumberType::PremiumRate, "900[2-9]\\d{6}"),
    p("US", NumberType::PersonalNumber, "5(?:00|21|22|33|44|66|77|88)[2-9]\\d{6}"),
    p("US", NumberType::FixedLineOrMobile, "[2-9]\\d{2}[2-9]\\d{6}"),
    p("CA", NumberType::TollFree, "8(?:00|33|44|55|66|77|88)[2-9]\\d{6}"),
    p("CA", NumberType::PremiumRate, "900[2-9]\\d{6}"),
    p("CA", NumberType::FixedLineOrMobile, "[2-9]\\d{2}[2-9]\\d{6}"),
    p("PR", NumberType::FixedLineOrMobile, "[2-9]\\d{2}[2-9]\\d{6}"),
    // United Kingdom
    p("GB", NumberType::TollFree, "80[08]\\d{7}"),
    p("GB", NumberType::PremiumRate, "9[018]\\d{8}"),
    p("GB", NumberType::PersonalNumber, "70\\d{8}"),
    p("GB", NumberType::Pager, "76\\d{8}"),
    p("GB", NumberType::VoIP, "56\\d{8}"),
    p("GB", NumberType::SharedCost, "84[2-5]\\d{7}"),
    p("GB", NumberType::Mobile, "7[1-57-9]\\d{8}"),
    p("GB", NumberType::FixedLine, "[12]\\d{9}"),
    // Germany
    p("DE", NumberType::TollFree, "800\\d{7,9}"),
    p("DE", NumberType::PremiumRate, "900\\d{7}"),
    p("DE", NumberType::VoIP, "32\\d{9,11}"),
    p("DE", NumberType::Mobile, "1[5-7]\\d{8,10}"),
    p("DE", NumberType::FixedLine, "[2-9]\\d{3,10}"),
    // France
    p("FR", NumberType::TollFree, "80[0-5]\\d{6}"),
    p("FR", NumberType::PremiumRate, "89[789]\\d{6}"),
    p("FR", NumberType::Mobile, "[67]\\d{8}"),
    p("FR", NumberType::VoIP, "9\\d{8}"),
    p("FR", NumberType::FixedLine, "[1-5]\\d{8}"),
    // Spain
    p("ES", NumberType::TollFree, "[89]00\\d{6}"),
    p("ES", NumberType::Mobile, "[67]\\d{8}"),
    p("ES", NumberType::FixedLine, "[89][1-8]\\d{7}"),
    // Italy: fixed-line numbers keep their leading zero, which the parsed
    // national value drops, so only unambiguous ranges are classified.
    p("IT", NumberType::TollFree, "80[03]\\d{3,6}"),
    p("IT", NumberType::Mobile, "3\\d{8,9}"),
    // Netherlands
    p("NL", NumberType::TollFree, "800\\d{4,7}"),
    p("NL", NumberType::PremiumRate, "90[069]\\d{4,7}"),
    p("NL", NumberType::Mobile, "6[1-58]\\d{7}"),
    p("NL", NumberType::FixedLine, "[1-5]\\d{8}"),
    // Russia and Kazakhstan share the plan under country code 7.
    p("RU", NumberType::TollFree, "800\\d{7}"),
    p("RU", NumberType::PremiumRate, "809\\d{7}"),
    p("RU", NumberType::Mobile, "9\\d{9}"),
    p("RU", NumberType::FixedLine, "[34]\\d{9}"),
    // Turkey
    p("TR", NumberType::TollFree, "800\\d{7}"),
    p("TR", NumberType::Mobile, "5\\d{9}"),
    p("TR", NumberType::FixedLine, "[24]\\d{9}"),
    // India
    p("IN", NumberType::TollFree, "1800\\d{6,7}"),
    p("IN", NumberType::Mobile, "[6-9]\\d{9}"),
    p("IN", NumberType::FixedLine, "[1-5]\\d{9}"),
    // China
    p("CN", NumberType::TollFree, "[48]00\\d{7}"),
    p("CN", NumberType::Mobile, "1[3-9]\\d{9}"),
    p("CN", NumberType::FixedLine, "[2-9]\\d{7,10}"),
    // Japan
    p("JP", NumberType::TollFree, "120\\d{6}|800\\d{7}"),
    p("JP", NumberType::PremiumRate, "990\\d{6}"),
    p("JP", NumberType::VoIP, "50\\d{8}"),
    p("JP", NumberType::Mobile, "[789]0\\d{8}"),
    p("JP", NumberType::FixedLine, "[1-9]\\d{8}"),
    // South Korea
    p("KR", NumberType::TollFree, "80\\d{7}"),
    p("KR", NumberType::VoIP, "70\\d{8}"),
    p("KR", NumberType::Mobile, "1[016-9]\\d{7,8}"),
    p("KR", NumberType::FixedLine, "[2-6]\\d{7,9}"),
    // Indonesia
    p("ID", NumberType::TollFree, "800\\d{5,7}"),
    p("ID", NumberType::Mobile, "8[1-9]\\d{7,9}"),
    p("ID", NumberType::FixedLine, "[2-7]\\d{7,10}"),
    // Philippines
    p("PH", NumberType::TollFree, "1800\\d{7,9}"),
    p("PH", NumberType::Mobile, "9\\d{9}"),
    p("PH", NumberType::FixedLine, "[2-8]\\d{7,9}"),
    // Singapore
    p("SG", NumberType::TollFree, "800\\d{7}"),
    p("SG", NumberType::VoIP, "3\\d{7}"),
    p("SG", NumberType::Mobile, "[89]\\d{7}"),
    p("SG", NumberType::FixedLine, "6\\d{7}"),
    // Australia
    p("AU", NumberType::TollFree, "1800\\d{6}"),
    p("AU", NumberType::PremiumRate, "190[0-2]\\d{6}"),
    p("AU", NumberType::Mobile, "4\\d{8}"),
    p("AU", NumberType::FixedLine, "[2378]\\d{8}"),
    // Brazil
    p("BR", NumberType::TollFree, "800\\d{6,7}"),
    p("BR", NumberType::Mobile, "[1-9]{2}9\\d{8}"),
    p("BR", NumberType::FixedLine, "[1-9]{2}[2-5]\\d{7}"),
    // Mexico
    p("MX", NumberType::TollFree, "800\\d{7}"),
    p("MX", NumberType::FixedLineOrMobile, "[1-9]\\d{9}"),
    // United Arab Emirates
    p("AE", NumberType::TollFree, "800\\d{2,9}"),
    p("AE", NumberType::Mobile, "5[0245568]\\d{7}"),
    p("AE", NumberType::FixedLine, "[2-4679]\\d{7}"),
    // South Africa
    p("ZA", NumberType::TollFree, "800\\d{6}"),
    p("ZA", NumberType::PremiumRate, "90\\d{7}"),
    p("ZA", NumberType::Mobile, "[67]\\d{8}|8[1-4]\\d{7}"),
    p("ZA", NumberType::FixedLine, "[1-5]\\d{8}"),
    // Nigeria
    p("NG", NumberType::TollFree, "800\\d{7}"),
    p("NG", NumberType::Mobile, "[789]0\\d{8}|81\\d{8}"),
    p("NG", NumberType::FixedLine, "[1-7]\\d{6,7}"),
    // Kenya
    p("KE", NumberType::TollFree, "800\\d{6,7}"),
    p("KE", NumberType::Mobile, "7\\d{8}|1[01]\\d{7}"),
    p("KE", NumberType::FixedLine, "[2-6]\\d{6,8}"),
];
