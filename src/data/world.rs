use std::collections::HashMap;

use log::warn;

use crate::number::RegionCode;

/// Country-level facts for one region. Border names are stored in a fixed
/// order so reports stay byte-identical between runs.
#[derive(Debug, PartialEq, Eq)]
pub struct CountryRecord {
    pub region: &'static str,
    pub name: &'static str,
    pub capital: &'static str,
    pub currency: &'static str,
    pub region_label: &'static str,
    pub borders: &'static [&'static str],
}

const fn c(
    region: &'static str,
    name: &'static str,
    capital: &'static str,
    currency: &'static str,
    region_label: &'static str,
    borders: &'static [&'static str],
) -> CountryRecord {
    CountryRecord {
        region,
        name,
        capital,
        currency,
        region_label,
        borders,
    }
}

/// The bundled world table. A region the parser can produce but this table
/// does not know is treated as corrupt bundled data, not as a provider
/// miss, so coverage errs on the side of inclusion.
pub const WORLD: &[CountryRecord] = &[
    // Europe
    c("AD", "Andorra", "Andorra la Vella", "EUR", "Europe", &["France", "Spain"]),
    c("AL", "Albania", "Tirana", "ALL", "Europe", &["Greece", "Kosovo", "Montenegro", "North Macedonia"]),
    c("AT", "Austria", "Vienna", "EUR", "Europe", &["Czechia", "Germany", "Hungary", "Italy", "Liechtenstein", "Slovakia", "Slovenia", "Switzerland"]),
    c("AX", "Aland Islands", "Mariehamn", "EUR", "Europe", &[]),
    c("BA", "Bosnia and Herzegovina", "Sarajevo", "BAM", "Europe", &["Croatia", "Montenegro", "Serbia"]),
    c("BE", "Belgium", "Brussels", "EUR", "Europe", &["France", "Germany", "Luxembourg", "Netherlands"]),
    c("BG", "Bulgaria", "Sofia", "BGN", "Europe", &["Greece", "North Macedonia", "Romania", "Serbia", "Turkey"]),
    c("BY", "Belarus", "Minsk", "BYN", "Europe", &["Latvia", "Lithuania", "Poland", "Russia", "Ukraine"]),
    c("CH", "Switzerland", "Bern", "CHF", "Europe", &["Austria", "France", "Germany", "Italy", "Liechtenstein"]),
    c("CY", "Cyprus", "Nicosia", "EUR", "Europe", &[]),
    c("CZ", "Czechia", "Prague", "CZK", "Europe", &["Austria", "Germany", "Poland", "Slovakia"]),
    c("DE", "Germany", "Berlin", "EUR", "Europe", &["Austria", "Belgium", "Czechia", "Denmark", "France", "Luxembourg", "Netherlands", "Poland", "Switzerland"]),
    c("DK", "Denmark", "Copenhagen", "DKK", "Europe", &["Germany"]),
    c("EE", "Estonia", "Tallinn", "EUR", "Europe", &["Latvia", "Russia"]),
    c("ES", "Spain", "Madrid", "EUR", "Europe", &["Andorra", "France", "Gibraltar", "Morocco", "Portugal"]),
    c("FI", "Finland", "Helsinki", "EUR", "Europe", &["Norway", "Russia", "Sweden"]),
    c("FO", "Faroe Islands", "Torshavn", "DKK", "Europe", &[]),
    c("FR", "France", "Paris", "EUR", "Europe", &["Andorra", "Belgium", "Germany", "Italy", "Luxembourg", "Monaco", "Spain", "Switzerland"]),
    c("GB", "United Kingdom", "London", "GBP", "Europe", &["Ireland"]),
    c("GG", "Guernsey", "Saint Peter Port", "GBP", "Europe", &[]),
    c("GI", "Gibraltar", "Gibraltar", "GIP", "Europe", &["Spain"]),
    c("GR", "Greece", "Athens", "EUR", "Europe", &["Albania", "Bulgaria", "North Macedonia", "Turkey"]),
    c("HR", "Croatia", "Zagreb", "EUR", "Europe", &["Bosnia and Herzegovina", "Hungary", "Montenegro", "Serbia", "Slovenia"]),
    c("HU", "Hungary", "Budapest", "HUF", "Europe", &["Austria", "Croatia", "Romania", "Serbia", "Slovakia", "Slovenia", "Ukraine"]),
    c("IE", "Ireland", "Dublin", "EUR", "Europe", &["United Kingdom"]),
    c("IM", "Isle of Man", "Douglas", "GBP", "Europe", &[]),
    c("IS", "Iceland", "Reykjavik", "ISK", "Europe", &[]),
    c("IT", "Italy", "Rome", "EUR", "Europe", &["Austria", "France", "San Marino", "Slovenia", "Switzerland", "Vatican City"]),
    c("JE", "Jersey", "Saint Helier", "GBP", "Europe", &[]),
    c("LI", "Liechtenstein", "Vaduz", "CHF", "Europe", &["Austria", "Switzerland"]),
    c("LT", "Lithuania", "Vilnius", "EUR", "Europe", &["Belarus", "Latvia", "Poland", "Russia"]),
    c("LU", "Luxembourg", "Luxembourg", "EUR", "Europe", &["Belgium", "France", "Germany"]),
    c("LV", "Latvia", "Riga", "EUR", "Europe", &["Belarus", "Estonia", "Lithuania", "Russia"]),
    c("MC", "Monaco", "Monaco", "EUR", "Europe", &["France"]),
    c("MD", "Moldova", "Chisinau", "MDL", "Europe", &["Romania", "Ukraine"]),
    c("ME", "Montenegro", "Podgorica", "EUR", "Europe", &["Albania", "Bosnia and Herzegovina", "Croatia", "Kosovo", "Serbia"]),
    c("MK", "North Macedonia", "Skopje", "MKD", "Europe", &["Albania", "Bulgaria", "Greece", "Kosovo", "Serbia"]),
    c("MT", "Malta", "Valletta", "EUR", "Europe", &[]),
    c("NL", "Netherlands", "Amsterdam", "EUR", "Europe", &["Belgium", "Germany"]),
    c("NO", "Norway", "Oslo", "NOK", "Europe", &["Finland", "Russia", "Sweden"]),
    c("PL", "Poland", "Warsaw", "PLN", "Europe", &["Belarus", "Czechia", "Germany", "Lithuania", "Russia", "Slovakia", "Ukraine"]),
    c("PT", "Portugal", "Lisbon", "EUR", "Europe", &["Spain"]),
    c("RO", "Romania", "Bucharest", "RON", "Europe", &["Bulgaria", "Hungary", "Moldova", "Serbia", "Ukraine"]),
    c("RS", "Serbia", "Belgrade", "RSD", "Europe", &["Bosnia and Herzegovina", "Bulgaria", "Croatia", "Hungary", "Kosovo", "Montenegro", "North Macedonia", "Romania"]),
    c("RU", "Russia", "Moscow", "RUB", "Europe", &["Azerbaijan", "Belarus", "China", "Estonia", "Finland", "Georgia", "Kazakhstan", "Latvia", "Lithuania", "Mongolia", "North Korea", "Norway", "Poland", "Ukraine"]),
    c("SE", "Sweden", "Stockholm", "SEK", "Europe", &["Finland", "Norway"]),
    c("SI", "Slovenia", "Ljubljana", "EUR", "Europe", &["Austria", "Croatia", "Hungary", "Italy"]),
    c("SJ", "Svalbard and Jan Mayen", "Longyearbyen", "NOK", "Europe", &[]),
    c("SK", "Slovakia", "Bratislava", "EUR", "Europe", &["Austria", "Czechia", "Hungary", "Poland", "Ukraine"]),
    c("SM", "San Marino", "San Marino", "EUR", "Europe", &["Italy"]),
    c("UA", "Ukraine", "Kyiv", "UAH", "Europe", &["Belarus", "Hungary", "Moldova", "Poland", "Romania", "Russia", "Slovakia"]),
    c("VA", "Vatican City", "Vatican City", "EUR", "Europe", &["Italy"]),
    c("XK", "Kosovo", "Pristina", "EUR", "Europe", &["Albania", "Montenegro", "North Macedonia", "Serbia"]),
    // Americas
    c("AG", "Antigua and Barbuda", "Saint John's", "XCD", "Americas", &[]),
    c("AI", "Anguilla", "The Valley", "XCD", "Americas", &[]),
    c("AR", "Argentina", "Buenos Aires", "ARS", "Americas", &["Bolivia", "Brazil", "Chile", "Paraguay", "Uruguay"]),
    c("AW", "Aruba", "Oranjestad", "AWG", "Americas", &[]),
    c("BB", "Barbados", "Bridgetown", "BBD", "Americas", &[]),
    c("BL", "Saint Barthelemy", "Gustavia", "EUR", "Americas", &[]),
    c("BM", "Bermuda", "Hamilton", "BMD", "Americas", &[]),
    c("BO", "Bolivia", "Sucre", "BOB", "Americas", &["Argentina", "Brazil", "Chile", "Paraguay", "Peru"]),
    c("BQ", "Caribbean Netherlands", "Kralendijk", "USD", "Americas", &[]),
    c("BR", "Brazil", "Brasilia", "BRL", "Americas", &["Argentina", "Bolivia", "Colombia", "French Guiana", "Guyana", "Paraguay", "Peru", "Suriname", "Uruguay", "Venezuela"]),
    c("BS", "Bahamas", "Nassau", "BSD", "Americas", &[]),
    c("BZ", "Belize", "Belmopan", "BZD", "Americas", &["Guatemala", "Mexico"]),
    c("CA", "Canada", "Ottawa", "CAD", "Americas", &["United States"]),
    c("CL", "Chile", "Santiago", "CLP", "Americas", &["Argentina", "Bolivia", "Peru"]),
    c("CO", "Colombia", "Bogota", "COP", "Americas", &["Brazil", "Ecuador", "Panama", "Peru", "Venezuela"]),
    c("CR", "Costa Rica", "San Jose", "CRC", "Americas", &["Nicaragua", "Panama"]),
    c("CU", "Cuba", "Havana", "CUP", "Americas", &[]),
    c("CW", "Curacao", "Willemstad", "ANG", "Americas", &[]),
    c("DM", "Dominica", "Roseau", "XCD", "Americas", &[]),
    c("DO", "Dominican Republic", "Santo Domingo", "DOP", "Americas", &["Haiti"]),
    c("EC", "Ecuador", "Quito", "USD", "Americas", &["Colombia", "Peru"]),
    c("FK", "Falkland Islands", "Stanley", "FKP", "Americas", &[]),
    c("GD", "Grenada", "Saint George's", "XCD", "Americas", &[]),
    c("GF", "French Guiana", "Cayenne", "EUR", "Americas", &["Brazil", "Suriname"]),
    c("GL", "Greenland", "Nuuk", "DKK", "Americas", &[]),
    c("GP", "Guadeloupe", "Basse-Terre", "EUR", "Americas", &[]),
    c("GT", "Guatemala", "Guatemala City", "GTQ", "Americas", &["Belize", "El Salvador", "Honduras", "Mexico"]),
    c("GY", "Guyana", "Georgetown", "GYD", "Americas", &["Brazil", "Suriname", "Venezuela"]),
    c("HN", "Honduras", "Tegucigalpa", "HNL", "Americas", &["El Salvador", "Guatemala", "Nicaragua"]),
    c("HT", "Haiti", "Port-au-Prince", "HTG", "Americas", &["Dominican Republic"]),
    c("JM", "Jamaica", "Kingston", "JMD", "Americas", &[]),
    c("KN", "Saint Kitts and Nevis", "Basseterre", "XCD", "Americas", &[]),
    c("KY", "Cayman Islands", "George Town", "KYD", "Americas", &[]),
    c("LC", "Saint Lucia", "Castries", "XCD", "Americas", &[]),
    c("MF", "Saint Martin", "Marigot", "EUR", "Americas", &["Sint Maarten"]),
    c("MQ", "Martinique", "Fort-de-France", "EUR", "Americas", &[]),
    c("MS", "Montserrat", "Brades", "XCD", "Americas", &[]),
    c("MX", "Mexico", "Mexico City", "MXN", "Americas", &["Belize", "Guatemala", "United States"]),
    c("NI", "Nicaragua", "Managua", "NIO", "Americas", &["Costa Rica", "Honduras"]),
    c("PA", "Panama", "Panama City", "PAB", "Americas", &["Colombia", "Costa Rica"]),
    c("PE", "Peru", "Lima", "PEN", "Americas", &["Bolivia", "Brazil", "Chile", "Colombia", "Ecuador"]),
    c("PM", "Saint Pierre and Miquelon", "Saint-Pierre", "EUR", "Americas", &[]),
    c("PR", "Puerto Rico", "San Juan", "USD", "Americas", &[]),
    c("PY", "Paraguay", "Asuncion", "PYG", "Americas", &["Argentina", "Bolivia", "Brazil"]),
    c("SR", "Suriname", "Paramaribo", "SRD", "Americas", &["Brazil", "French Guiana", "Guyana"]),
    c("SV", "El Salvador", "San Salvador", "USD", "Americas", &["Guatemala", "Honduras"]),
    c("SX", "Sint Maarten", "Philipsburg", "ANG", "Americas", &["Saint Martin"]),
    c("TC", "Turks and Caicos Islands", "Cockburn Town", "USD", "Americas", &[]),
    c("TT", "Trinidad and Tobago", "Port of Spain", "TTD", "Americas", &[]),
    c("US", "United States", "Washington, D.C.", "USD", "Americas", &["Canada", "Mexico"]),
    c("UY", "Uruguay", "Montevideo", "UYU", "Americas", &["Argentina", "Brazil"]),
    c("VC", "Saint Vincent and the Grenadines", "Kingstown", "XCD", "Americas", &[]),
    c("VE", "Venezuela", "Caracas", "VES", "Americas", &["Brazil", "Colombia", "Guyana"]),
    c("VG", "British Virgin Islands", "Road Town", "USD", "Americas", &[]),
    c("VI", "U.S. Virgin Islands", "Charlotte Amalie", "USD", "Americas", &[]),
    // Asia
    c("AE", "United Arab Emirates", "Abu Dhabi", "AED", "Asia", &["Oman", "Saudi Arabia"]),
    c("AF", "Afghanistan", "Kabul", "AFN", "Asia", &["China", "Iran", "Pakistan", "Tajikistan", "Turkmenistan", "Uzbekistan"]),
    c("AM", "Armenia", "Yerevan", "AMD", "Asia", &["Azerbaijan", "Georgia", "Iran", "Turkey"]),
    c("AZ", "Azerbaijan", "Baku", "AZN", "Asia", &["Armenia", "Georgia", "Iran", "Russia", "Turkey"]),
    c("BD", "Bangladesh", "Dhaka", "BDT", "Asia", &["India", "Myanmar"]),
    c("BH", "Bahrain", "Manama", "BHD", "Asia", &[]),
    c("BN", "Brunei", "Bandar Seri Begawan", "BND", "Asia", &["Malaysia"]),
    c("BT", "Bhutan", "Thimphu", "BTN", "Asia", &["China", "India"]),
    c("CN", "China", "Beijing", "CNY", "Asia", &["Afghanistan", "Bhutan", "India", "Kazakhstan", "Kyrgyzstan", "Laos", "Mongolia", "Myanmar", "Nepal", "North Korea", "Pakistan", "Russia", "Tajikistan", "Vietnam"]),
    c("GE", "Georgia", "Tbilisi", "GEL", "Asia", &["Armenia", "Azerbaijan", "Russia", "Turkey"]),
    c("HK", "Hong Kong", "Hong Kong", "HKD", "Asia", &["China"]),
    c("ID", "Indonesia", "Jakarta", "IDR", "Asia", &["Malaysia", "Papua New Guinea", "Timor-Leste"]),
    c("IL", "Israel", "Jerusalem", "ILS", "Asia", &["Egypt", "Jordan", "Lebanon", "Syria"]),
    c("IN", "India", "New Delhi", "INR", "Asia", &["Bangladesh", "Bhutan", "China", "Myanmar", "Nepal", "Pakistan"]),
    c("IQ", "Iraq", "Baghdad", "IQD", "Asia", &["Iran", "Jordan", "Kuwait", "Saudi Arabia", "Syria", "Turkey"]),
    c("IR", "Iran", "Tehran", "IRR", "Asia", &["Afghanistan", "Armenia", "Azerbaijan", "Iraq", "Pakistan", "Turkey", "Turkmenistan"]),
    c("JO", "Jordan", "Amman", "JOD", "Asia", &["Iraq", "Israel", "Saudi Arabia", "Syria"]),
    c("JP", "Japan", "Tokyo", "JPY", "Asia", &[]),
    c("KG", "Kyrgyzstan", "Bishkek", "KGS", "Asia", &["China", "Kazakhstan", "Tajikistan", "Uzbekistan"]),
    c("KH", "Cambodia", "Phnom Penh", "KHR", "Asia", &["Laos", "Thailand", "Vietnam"]),
    c("KP", "North Korea", "Pyongyang", "KPW", "Asia", &["China", "Russia", "South Korea"]),
    c("KR", "South Korea", "Seoul", "KRW", "Asia", &["North Korea"]),
    c("KW", "Kuwait", "Kuwait City", "KWD", "Asia", &["Iraq", "Saudi Arabia"]),
    c("KZ", "Kazakhstan", "Astana", "KZT", "Asia", &["China", "Kyrgyzstan", "Russia", "Turkmenistan", "Uzbekistan"]),
    c("LA", "Laos", "Vientiane", "LAK", "Asia", &["Cambodia", "China", "Myanmar", "Thailand", "Vietnam"]),
    c("LB", "Lebanon", "Beirut", "LBP", "Asia", &["Israel", "Syria"]),
    c("LK", "Sri Lanka", "Sri Jayawardenepura Kotte", "LKR", "Asia", &[]),
    c("MM", "Myanmar", "Naypyidaw", "MMK", "Asia", &["Bangladesh", "China", "India", "Laos", "Thailand"]),
    c("MN", "Mongolia", "Ulaanbaatar", "MNT", "Asia", &["China", "Russia"]),
    c("MO", "Macau", "Macau", "MOP", "Asia", &["China"]),
    c("MV", "Maldives", "Male", "MVR", "Asia", &[]),
    c("MY", "Malaysia", "Kuala Lumpur", "MYR", "Asia", &["Brunei", "Indonesia", "Thailand"]),
    c("NP", "Nepal", "Kathmandu", "NPR", "Asia", &["China", "India"]),
    c("OM", "Oman", "Muscat", "OMR", "Asia", &["Saudi Arabia", "United Arab Emirates", "Yemen"]),
    c("PH", "Philippines", "Manila", "PHP", "Asia", &[]),
    c("PK", "Pakistan", "Islamabad", "PKR", "Asia", &["Afghanistan", "China", "India", "Iran"]),
    c("PS", "Palestine", "Ramallah", "ILS", "Asia", &["Egypt", "Israel", "Jordan"]),
    c("QA", "Qatar", "Doha", "QAR", "Asia", &["Saudi Arabia"]),
    c("SA", "Saudi Arabia", "Riyadh", "SAR", "Asia", &["Iraq", "Jordan", "Kuwait", "Oman", "Qatar", "United Arab Emirates", "Yemen"]),
    c("SG", "Singapore", "Singapore", "SGD", "Asia", &[]),
    c("SY", "Syria", "Damascus", "SYP", "Asia", &["Iraq", "Israel", "Jordan", "Lebanon", "Turkey"]),
    c("TH", "Thailand", "Bangkok", "THB", "Asia", &["Cambodia", "Laos", "Malaysia", "Myanmar"]),
    c("TJ", "Tajikistan", "Dushanbe", "TJS", "Asia", &["Afghanistan", "China", "Kyrgyzstan", "Uzbekistan"]),
    c("TL", "Timor-Leste", "Dili", "USD", "Asia", &["Indonesia"]),
    c("TM", "Turkmenistan", "Ashgabat", "TMT", "Asia", &["Afghanistan", "Iran", "Kazakhstan", "Uzbekistan"]),
    c("TR", "Turkey", "Ankara", "TRY", "Asia", &["Armenia", "Azerbaijan", "Bulgaria", "Georgia", "Greece", "Iran", "Iraq", "Syria"]),
    c("TW", "Taiwan", "Taipei", "TWD", "Asia", &[]),
    c("UZ", "Uzbekistan", "Tashkent", "UZS", "Asia", &["Afghanistan", "Kazakhstan", "Kyrgyzstan", "Tajikistan", "Turkmenistan"]),
    c("VN", "Vietnam", "Hanoi", "VND", "Asia", &["Cambodia", "China", "Laos"]),
    c("YE", "Yemen", "Sanaa", "YER", "Asia", &["Oman", "Saudi Arabia"]),
    // Africa
    c("AC", "Ascension Island", "Georgetown", "SHP", "Africa", &[]),
    c("AO", "Angola", "Luanda", "AOA", "Africa", &["DR Congo", "Namibia", "Republic of the Congo", "Zambia"]),
    c("BF", "Burkina Faso", "Ouagadougou", "XOF", "Africa", &["Benin", "Ghana", "Ivory Coast", "Mali", "Niger", "Togo"]),
    c("BI", "Burundi", "Gitega", "BIF", "Africa", &["DR Congo", "Rwanda", "Tanzania"]),
    c("BJ", "Benin", "Porto-Novo", "XOF", "Africa", &["Burkina Faso", "Niger", "Nigeria", "Togo"]),
    c("BW", "Botswana", "Gaborone", "BWP", "Africa", &["Namibia", "South Africa", "Zambia", "Zimbabwe"]),
    c("CD", "DR Congo", "Kinshasa", "CDF", "Africa", &["Angola", "Burundi", "Central African Republic", "Republic of the Congo", "Rwanda", "South Sudan", "Tanzania", "Uganda", "Zambia"]),
    c("CF", "Central African Republic", "Bangui", "XAF", "Africa", &["Cameroon", "Chad", "DR Congo", "Republic of the Congo", "South Sudan", "Sudan"]),
    c("CG", "Republic of the Congo", "Brazzaville", "XAF", "Africa", &["Angola", "Cameroon", "Central African Republic", "DR Congo", "Gabon"]),
    c("CI", "Ivory Coast", "Yamoussoukro", "XOF", "Africa", &["Burkina Faso", "Ghana", "Guinea", "Liberia", "Mali"]),
    c("CM", "Cameroon", "Yaounde", "XAF", "Africa", &["Central African Republic", "Chad", "Equatorial Guinea", "Gabon", "Nigeria", "Republic of the Congo"]),
    c("CV", "Cape Verde", "Praia", "CVE", "Africa", &[]),
    c("DJ", "Djibouti", "Djibouti", "DJF", "Africa", &["Eritrea", "Ethiopia", "Somalia"]),
    c("DZ", "Algeria", "Algiers", "DZD", "Africa", &["Libya", "Mali", "Mauritania", "Morocco", "Niger", "Tunisia", "Western Sahara"]),
    c("EG", "Egypt", "Cairo", "EGP", "Africa", &["Israel", "Libya", "Sudan"]),
    c("EH", "Western Sahara", "Laayoune", "MAD", "Africa", &["Algeria", "Mauritania", "Morocco"]),
    c("ER", "Eritrea", "Asmara", "ERN", "Africa", &["Djibouti", "Ethiopia", "Sudan"]),
    c("ET", "Ethiopia", "Addis Ababa", "ETB", "Africa", &["Djibouti", "Eritrea", "Kenya", "Somalia", "South Sudan", "Sudan"]),
    c("GA", "Gabon", "Libreville", "XAF", "Africa", &["Cameroon", "Equatorial Guinea", "Republic of the Congo"]),
    c("GH", "Ghana", "Accra", "GHS", "Africa", &["Burkina Faso", "Ivory Coast", "Togo"]),
    c("GM", "Gambia", "Banjul", "GMD", "Africa", &["Senegal"]),
    c("GN", "Guinea", "Conakry", "GNF", "Africa", &["Guinea-Bissau", "Ivory Coast", "Liberia", "Mali", "Senegal", "Sierra Leone"]),
    c("GQ", "Equatorial Guinea", "Malabo", "XAF", "Africa", &["Cameroon", "Gabon"]),
    c("GW", "Guinea-Bissau", "Bissau", "XOF", "Africa", &["Guinea", "Senegal"]),
    c("IO", "British Indian Ocean Territory", "Diego Garcia", "USD", "Africa", &[]),
    c("KE", "Kenya", "Nairobi", "KES", "Africa", &["Ethiopia", "Somalia", "South Sudan", "Tanzania", "Uganda"]),
    c("KM", "Comoros", "Moroni", "KMF", "Africa", &[]),
    c("LR", "Liberia", "Monrovia", "LRD", "Africa", &["Guinea", "Ivory Coast", "Sierra Leone"]),
    c("LS", "Lesotho", "Maseru", "LSL", "Africa", &["South Africa"]),
    c("LY", "Libya", "Tripoli", "LYD", "Africa", &["Algeria", "Chad", "Egypt", "Niger", "Sudan", "Tunisia"]),
    c("MA", "Morocco", "Rabat", "MAD", "Africa", &["Algeria", "Spain", "Western Sahara"]),
    c("MG", "Madagascar", "Antananarivo", "MGA", "Africa", &[]),
    c("ML", "Mali", "Bamako", "XOF", "Africa", &["Algeria", "Burkina Faso", "Guinea", "Ivory Coast", "Mauritania", "Niger", "Senegal"]),
    c("MR", "Mauritania", "Nouakchott", "MRU", "Africa", &["Algeria", "Mali", "Senegal", "Western Sahara"]),
    c("MU", "Mauritius", "Port Louis", "MUR", "Africa", &[]),
    c("MW", "Malawi", "Lilongwe", "MWK", "Africa", &["Mozambique", "Tanzania", "Zambia"]),
    c("MZ", "Mozambique", "Maputo", "MZN", "Africa", &["Eswatini", "Malawi", "South Africa", "Tanzania", "Zambia", "Zimbabwe"]),
    c("NA", "Namibia", "Windhoek", "NAD", "Africa", &["Angola", "Botswana", "South Africa", "Zambia"]),
    c("NE", "Niger", "Niamey", "XOF", "Africa", &["Algeria", "Benin", "Burkina Faso", "Chad", "Libya", "Mali", "Nigeria"]),
    c("NG", "Nigeria", "Abuja", "NGN", "Africa", &["Benin", "Cameroon", "Chad", "Niger"]),
    c("RE", "Reunion", "Saint-Denis", "EUR", "Africa", &[]),
    c("RW", "Rwanda", "Kigali", "RWF", "Africa", &["Burundi", "DR Congo", "Tanzania", "Uganda"]),
    c("SC", "Seychelles", "Victoria", "SCR", "Africa", &[]),
    c("SD", "Sudan", "Khartoum", "SDG", "Africa", &["Central African Republic", "Chad", "Egypt", "Eritrea", "Ethiopia", "Libya", "South Sudan"]),
    c("SH", "Saint Helena", "Jamestown", "SHP", "Africa", &[]),
    c("SL", "Sierra Leone", "Freetown", "SLE", "Africa", &["Guinea", "Liberia"]),
    c("SN", "Senegal", "Dakar", "XOF", "Africa", &["Gambia", "Guinea", "Guinea-Bissau", "Mali", "Mauritania"]),
    c("SO", "Somalia", "Mogadishu", "SOS", "Africa", &["Djibouti", "Ethiopia", "Kenya"]),
    c("SS", "South Sudan", "Juba", "SSP", "Africa", &["Central African Republic", "DR Congo", "Ethiopia", "Kenya", "Sudan", "Uganda"]),
    c("ST", "Sao Tome and Principe", "Sao Tome", "STN", "Africa", &[]),
    c("SZ", "Eswatini", "Mbabane", "SZL", "Africa", &["Mozambique", "South Africa"]),
    c("TA", "Tristan da Cunha", "Edinburgh of the Seven Seas", "GBP", "Africa", &[]),
    c("TD", "Chad", "N'Djamena", "XAF", "Africa", &["Cameroon", "Central African Republic", "Libya", "Niger", "Nigeria", "Sudan"]),
    c("TG", "Togo", "Lome", "XOF", "Africa", &["Benin", "Burkina Faso", "Ghana"]),
    c("TN", "Tunisia", "Tunis", "TND", "Africa", &["Algeria", "Libya"]),
    c("TZ", "Tanzania", "Dodoma", "TZS", "Africa", &["Burundi", "DR Congo", "Kenya", "Malawi", "Mozambique", "Rwanda", "Uganda", "Zambia"]),
    c("UG", "Uganda", "Kampala", "UGX", "Africa", &["DR Congo", "Kenya", "Rwanda", "South Sudan", "Tanzania"]),
    c("YT", "Mayotte", "Mamoudzou", "EUR", "Africa", &[]),
    c("ZA", "South Africa", "Pretoria", "ZAR", "Africa", &["Botswana", "Eswatini", "Lesotho", "Mozambique", "Namibia", "Zimbabwe"]),
    c("ZM", "Zambia", "Lusaka", "ZMW", "Africa", &["Angola", "Botswana", "DR Congo", "Malawi", "Mozambique", "Namibia", "Tanzania", "Zimbabwe"]),
    c("ZW", "Zimbabwe", "Harare", "ZWL", "Africa", &["Botswana", "Mozambique", "South Africa", "Zambia"]),
    // Oceania
    c("AS", "American Samoa", "Pago Pago", "USD", "Oceania", &[]),
    c("AU", "Australia", "Canberra", "AUD", "Oceania", &[]),
    c("CC", "Cocos (Keeling) Islands", "West Island", "AUD", "Oceania", &[]),
    c("CK", "Cook Islands", "Avarua", "NZD", "Oceania", &[]),
    c("CX", "Christmas Island", "Flying Fish Cove", "AUD", "Oceania", &[]),
    c("FJ", "Fiji", "Suva", "FJD", "Oceania", &[]),
    c("FM", "Micronesia", "Palikir", "USD", "Oceania", &[]),
    c("GU", "Guam", "Hagatna", "USD", "Oceania", &[]),
    c("KI", "Kiribati", "Tarawa", "AUD", "Oceania", &[]),
    c("MH", "Marshall Islands", "Majuro", "USD", "Oceania", &[]),
    c("MP", "Northern Mariana Islands", "Saipan", "USD", "Oceania", &[]),
    c("NC", "New Caledonia", "Noumea", "XPF", "Oceania", &[]),
    c("NF", "Norfolk Island", "Kingston", "AUD", "Oceania", &[]),
    c("NR", "Nauru", "Yaren", "AUD", "Oceania", &[]),
    c("NU", "Niue", "Alofi", "NZD", "Oceania", &[]),
    c("NZ", "New Zealand", "Wellington", "NZD", "Oceania", &[]),
    c("PF", "French Polynesia", "Papeete", "XPF", "Oceania", &[]),
    c("PG", "Papua New Guinea", "Port Moresby", "PGK", "Oceania", &["Indonesia"]),
    c("PW", "Palau", "Ngerulmud", "USD", "Oceania", &[]),
    c("SB", "Solomon Islands", "Honiara", "SBD", "Oceania", &[]),
    c("TK", "Tokelau", "Fakaofo", "NZD", "Oceania", &[]),
    c("TO", "Tonga", "Nuku'alofa", "TOP", "Oceania", &[]),
    c("TV", "Tuvalu", "Funafuti", "AUD", "Oceania", &[]),
    c("VU", "Vanuatu", "Port Vila", "VUV", "Oceania", &[]),
    c("WF", "Wallis and Futuna", "Mata-Utu", "XPF", "Oceania", &[]),
    c("WS", "Samoa", "Apia", "WST", "Oceania", &[]),
];

/// Read-only world-context lookup, keyed by validated region codes and
/// built once at startup.
pub struct WorldTable {
    records: HashMap<RegionCode, &'static CountryRecord>,
}

impl WorldTable {
    pub fn new() -> Self {
        Self::from_records(WORLD)
    }

    /// Builds a table from an arbitrary record slice, so tests can run the
    /// pipeline against substitute data.
    pub fn from_records(records: &'static [CountryRecord]) -> Self {
        let mut map = HashMap::with_capacity(records.len());
        for record in records {
            match RegionCode::new(record.region) {
                Ok(code) => {
                    map.insert(code, record);
                }
                Err(err) => warn!("skipping malformed world table entry: {}", err),
            }
        }
        Self { records: map }
    }

    pub fn get(&self, region: &RegionCode) -> Option<&'static CountryRecord> {
        self.records.get(region).copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for WorldTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{WorldTable, WORLD};
    use crate::number::RegionCode;

    #[test]
    fn bundled_table_loads_every_record() {
        let table = WorldTable::new();
        assert_eq!(table.len(), WORLD.len());
    }

    #[test]
    fn island_nations_have_no_borders() {
        let table = WorldTable::new();
        let japan = table.get(&RegionCode::new("JP").unwrap()).unwrap();
        assert!(japan.borders.is_empty());
    }

    #[test]
    fn covers_every_region_the_parser_can_emit() {
        // The numbering plans that most often surface small territories:
        // NANPA shares +1 across US territories, and the French overseas
        // departments have their own region codes under +590/+594/+596/
        // +262. A miss here would wrongly trip the corrupt-table fault.
        let table = WorldTable::new();
        for region in [
            "AS", "GU", "MP", "PR", "VI", "GF", "GP", "MQ", "RE", "YT", "AW", "CW", "BQ", "BL",
            "MF", "PM", "TV", "KI", "NR", "PW", "FM", "MH", "NU", "CK", "TK", "WF",
        ] {
            assert!(
                table.get(&RegionCode::new(region).unwrap()).is_some(),
                "world table is missing {}",
                region
            );
        }
    }

    #[test]
    fn lookup_is_case_insensitive_through_region_codes() {
        let table = WorldTable::new();
        let us = table.get(&RegionCode::new("us").unwrap()).unwrap();
        assert_eq!(us.name, "United States");
        assert_eq!(us.capital, "Washington, D.C.");
    }
}
