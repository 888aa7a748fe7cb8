use std::collections::HashMap;

use log::warn;

use crate::number::RegionCode;

/// Primary IANA zone per region.
///
/// Several regions span multiple zones; this table deliberately keeps one
/// canonical zone per region (the first zone in the bundled ordering), so
/// the reported local time for e.g. a +1-415 number is the US primary zone
/// rather than the Pacific one. A per-area-code zone table would be needed
/// to do better, and the bundled data does not carry one.
pub const PRIMARY_ZONES: &[(&str, &str)] = &[
    // Europe
    ("AD", "Europe/Andorra"),
    ("AL", "Europe/Tirane"),
    ("AT", "Europe/Vienna"),
    ("AX", "Europe/Mariehamn"),
    ("BA", "Europe/Sarajevo"),
    ("BE", "Europe/Brussels"),
    ("BG", "Europe/Sofia"),
    ("BY", "Europe/Minsk"),
    ("CH", "Europe/Zurich"),
    ("CY", "Asia/Nicosia"),
    ("CZ", "Europe/Prague"),
    ("DE", "Europe/Berlin"),
    ("DK", "Europe/Copenhagen"),
    ("EE", "Europe/Tallinn"),
    ("ES", "Europe/Madrid"),
    ("FI", "Europe/Helsinki"),
    ("FO", "Atlantic/Faroe"),
    ("FR", "Europe/Paris"),
    ("GB", "Europe/London"),
    ("GG", "Europe/Guernsey"),
    ("GI", "Europe/Gibraltar"),
    ("GR", "Europe/Athens"),
    ("HR", "Europe/Zagreb"),
    ("HU", "Europe/Budapest"),
    ("IE", "Europe/Dublin"),
    ("IM", "Europe/Isle_of_Man"),
    ("IS", "Atlantic/Reykjavik"),
    ("IT", "Europe/Rome"),
    ("JE", "Europe/Jersey"),
    ("LI", "Europe/Vaduz"),
    ("LT", "Europe/Vilnius"),
    ("LU", "Europe/Luxembourg"),
    ("LV", "Europe/Riga"),
    ("MC", "Europe/Monaco"),
    ("MD", "Europe/Chisinau"),
    ("ME", "Europe/Podgorica"),
    ("MK", "Europe/Skopje"),
    ("MT", "Europe/Malta"),
    ("NL", "Europe/Amsterdam"),
    ("NO", "Europe/Oslo"),
    ("PL", "Europe/Warsaw"),
    ("PT", "Europe/Lisbon"),
    ("RO", "Europe/Bucharest"),
    ("RS", "Europe/Belgrade"),
    ("RU", "Europe/Moscow"),
    ("SE", "Europe/Stockholm"),
    ("SI", "Europe/Ljubljana"),
    ("SJ", "Arctic/Longyearbyen"),
    ("SK", "Europe/Bratislava"),
    ("SM", "Europe/San_Marino"),
    ("UA", "Europe/Kyiv"),
    ("VA", "Europe/Vatican"),
    ("XK", "Europe/Belgrade"),
    // Americas
    ("AG", "America/Antigua"),
    ("AI", "America/Anguilla"),
    ("AR", "America/Argentina/Buenos_Aires"),
    ("AW", "America/Aruba"),
    ("BB", "America/Barbados"),
    ("BL", "America/St_Barthelemy"),
    ("BM", "Atlantic/Bermuda"),
    ("BO", "America/La_Paz"),
    ("BQ", "America/Kralendijk"),
    ("BR", "America/Sao_Paulo"),
    ("BS", "America/Nassau"),
    ("BZ", "America/Belize"),
    ("CA", "America/Toronto"),
    ("CL", "America/Santiago"),
    ("CO", "America/Bogota"),
    ("CR", "America/Costa_Rica"),
    ("CU", "America/Havana"),
    ("CW", "America/Curacao"),
    ("DM", "America/Dominica"),
    ("DO", "America/Santo_Domingo"),
    ("EC", "America/Guayaquil"),
    ("FK", "Atlantic/Stanley"),
    ("GD", "America/Grenada"),
    ("GF", "America/Cayenne"),
    ("GL", "America/Nuuk"),
    ("GP", "America/Guadeloupe"),
    ("GT", "America/Guatemala"),
    ("GY", "America/Guyana"),
    ("HN", "America/Tegucigalpa"),
    ("HT", "America/Port-au-Prince"),
    ("JM", "America/Jamaica"),
    ("KN", "America/St_Kitts"),
    ("KY", "America/Cayman"),
    ("LC", "America/St_Lucia"),
    ("MF", "America/Marigot"),
    ("MQ", "America/Martinique"),
    ("MS", "America/Montserrat"),
    ("MX", "America/Mexico_City"),
    ("NI", "America/Managua"),
    ("PA", "America/Panama"),
    ("PE", "America/Lima"),
    ("PM", "America/Miquelon"),
    ("PR", "America/Puerto_Rico"),
    ("PY", "America/Asuncion"),
    ("SR", "America/Paramaribo"),
    ("SV", "America/El_Salvador"),
    ("SX", "America/Lower_Princes"),
    ("TC", "America/Grand_Turk"),
    ("TT", "America/Port_of_Spain"),
    ("US", "America/New_York"),
    ("UY", "America/Montevideo"),
    ("VC", "America/St_Vincent"),
    ("VE", "America/Caracas"),
    ("VG", "America/Tortola"),
    ("VI", "America/St_Thomas"),
    // Asia
    ("AE", "Asia/Dubai"),
    ("AF", "Asia/Kabul"),
    ("AM", "Asia/Yerevan"),
    ("AZ", "Asia/Baku"),
    ("BD", "Asia/Dhaka"),
    ("BH", "Asia/Bahrain"),
    ("BN", "Asia/Brunei"),
    ("BT", "Asia/Thimphu"),
    ("CN", "Asia/Shanghai"),
    ("GE", "Asia/Tbilisi"),
    ("HK", "Asia/Hong_Kong"),
    ("ID", "Asia/Jakarta"),
    ("IL", "Asia/Jerusalem"),
    ("IN", "Asia/Kolkata"),
    ("IQ", "Asia/Baghdad"),
    ("IR", "Asia/Tehran"),
    ("JO", "Asia/Amman"),
    ("JP", "Asia/Tokyo"),
    ("KG", "Asia/Bishkek"),
    ("KH", "Asia/Phnom_Penh"),
    ("KP", "Asia/Pyongyang"),
    ("KR", "Asia/Seoul"),
    ("KW", "Asia/Kuwait"),
    ("KZ", "Asia/Almaty"),
    ("LA", "Asia/Vientiane"),
    ("LB", "Asia/Beirut"),
    ("LK", "Asia/Colombo"),
    ("MM", "Asia/Yangon"),
    ("MN", "Asia/Ulaanbaatar"),
    ("MO", "Asia/Macau"),
    ("MV", "Indian/Maldives"),
    ("MY", "Asia/Kuala_Lumpur"),
    ("NP", "Asia/Kathmandu"),
    ("OM", "Asia/Muscat"),
    ("PH", "Asia/Manila"),
    ("PK", "Asia/Karachi"),
    ("PS", "Asia/Gaza"),
    ("QA", "Asia/Qatar"),
    ("SA", "Asia/Riyadh"),
    ("SG", "Asia/Singapore"),
    ("SY", "Asia/Damascus"),
    ("TH", "Asia/Bangkok"),
    ("TJ", "Asia/Dushanbe"),
    ("TL", "Asia/Dili"),
    ("TM", "Asia/Ashgabat"),
    ("TR", "Europe/Istanbul"),
    ("TW", "Asia/Taipei"),
    ("UZ", "Asia/Tashkent"),
    ("VN", "Asia/Ho_Chi_Minh"),
    ("YE", "Asia/Aden"),
    // Africa
    ("AC", "Atlantic/St_Helena"),
    ("AO", "Africa/Luanda"),
    ("BF", "Africa/Ouagadougou"),
    ("BI", "Africa/Bujumbura"),
    ("BJ", "Africa/Porto-Novo"),
    ("BW", "Africa/Gaborone"),
    ("CD", "Africa/Kinshasa"),
    ("CF", "Africa/Bangui"),
    ("CG", "Africa/Brazzaville"),
    ("CI", "Africa/Abidjan"),
    ("CM", "Africa/Douala"),
    ("CV", "Atlantic/Cape_Verde"),
    ("DJ", "Africa/Djibouti"),
    ("DZ", "Africa/Algiers"),
    ("EG", "Africa/Cairo"),
    ("EH", "Africa/El_Aaiun"),
    ("ER", "Africa/Asmara"),
    ("ET", "Africa/Addis_Ababa"),
    ("GA", "Africa/Libreville"),
    ("GH", "Africa/Accra"),
    ("GM", "Africa/Banjul"),
    ("GN", "Africa/Conakry"),
    ("GQ", "Africa/Malabo"),
    ("GW", "Africa/Bissau"),
    ("IO", "Indian/Chagos"),
    ("KE", "Africa/Nairobi"),
    ("KM", "Indian/Comoro"),
    ("LR", "Africa/Monrovia"),
    ("LS", "Africa/Maseru"),
    ("LY", "Africa/Tripoli"),
    ("MA", "Africa/Casablanca"),
    ("MG", "Indian/Antananarivo"),
    ("ML", "Africa/Bamako"),
    ("MR", "Africa/Nouakchott"),
    ("MU", "Indian/Mauritius"),
    ("MW", "Africa/Blantyre"),
    ("MZ", "Africa/Maputo"),
    ("NA", "Africa/Windhoek"),
    ("NE", "Africa/Niamey"),
    ("NG", "Africa/Lagos"),
    ("RE", "Indian/Reunion"),
    ("RW", "Africa/Kigali"),
    ("SC", "Indian/Mahe"),
    ("SD", "Africa/Khartoum"),
    ("SH", "Atlantic/St_Helena"),
    ("SL", "Africa/Freetown"),
    ("SN", "Africa/Dakar"),
    ("SO", "Africa/Mogadishu"),
    ("SS", "Africa/Juba"),
    ("ST", "Africa/Sao_Tome"),
    ("SZ", "Africa/Mbabane"),
    ("TA", "Atlantic/St_Helena"),
    ("TD", "Africa/Ndjamena"),
    ("TG", "Africa/Lome"),
    ("TN", "Africa/Tunis"),
    ("TZ", "Africa/Dar_es_Salaam"),
    ("UG", "Africa/Kampala"),
    ("YT", "Indian/Mayotte"),
    ("ZA", "Africa/Johannesburg"),
    ("ZM", "Africa/Lusaka"),
    ("ZW", "Africa/Harare"),
    // Oceania
    ("AS", "Pacific/Pago_Pago"),
    ("AU", "Australia/Sydney"),
    ("CC", "Indian/Cocos"),
    ("CK", "Pacific/Rarotonga"),
    ("CX", "Indian/Christmas"),
    ("FJ", "Pacific/Fiji"),
    ("FM", "Pacific/Pohnpei"),
    ("GU", "Pacific/Guam"),
    ("KI", "Pacific/Tarawa"),
    ("MH", "Pacific/Majuro"),
    ("MP", "Pacific/Saipan"),
    ("NC", "Pacific/Noumea"),
    ("NF", "Pacific/Norfolk"),
    ("NR", "Pacific/Nauru"),
    ("NU", "Pacific/Niue"),
    ("NZ", "Pacific/Auckland"),
    ("PF", "Pacific/Tahiti"),
    ("PG", "Pacific/Port_Moresby"),
    ("PW", "Pacific/Palau"),
    ("SB", "Pacific/Guadalcanal"),
    ("TK", "Pacific/Fakaofo"),
    ("TO", "Pacific/Tongatapu"),
    ("TV", "Pacific/Funafuti"),
    ("VU", "Pacific/Efate"),
    ("WF", "Pacific/Wallis"),
    ("WS", "Pacific/Apia"),
];

/// Region to primary-zone lookup built once at startup.
pub struct TimezoneTable {
    zones: HashMap<RegionCode, &'static str>,
}

impl TimezoneTable {
    pub fn new() -> Self {
        Self::from_entries(PRIMARY_ZONES)
    }

    pub fn from_entries(entries: &'static [(&'static str, &'static str)]) -> Self {
        let mut zones = HashMap::with_capacity(entries.len());
        for (region, zone) in entries {
            match RegionCode::new(region) {
                Ok(code) => {
                    zones.insert(code, *zone);
                }
                Err(err) => warn!("skipping malformed timezone entry: {}", err),
            }
        }
        Self { zones }
    }

    pub fn primary_zone(&self, region: &RegionCode) -> Option<&'static str> {
        self.zones.get(region).copied()
    }
}

impl Default for TimezoneTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{TimezoneTable, PRIMARY_ZONES};
    use crate::number::RegionCode;

    #[test]
    fn every_bundled_zone_is_a_known_iana_id() {
        for (region, zone) in PRIMARY_ZONES {
            assert!(
                chrono_tz::Tz::from_str(zone).is_ok(),
                "{} maps to unknown zone {}",
                region,
                zone
            );
        }
    }

    #[test]
    fn multi_zone_regions_resolve_to_the_primary_zone() {
        let table = TimezoneTable::new();
        let zone = table.primary_zone(&RegionCode::new("US").unwrap());
        assert_eq!(zone, Some("America/New_York"));
    }

    #[test]
    fn unknown_regions_have_no_zone() {
        let table = TimezoneTable::new();
        assert!(table.primary_zone(&RegionCode::new("ZQ").unwrap()).is_none());
    }
}
