// ============================================================================
// ISO 4217 Seed Table
// Static currency data preloaded into every seeded registry
// ============================================================================

/// One seed row: code, display name, numeric code, fraction digits, minor-unit divisor.
pub(crate) type SeedRow = (&'static str, &'static str, u16, u8, u32);

/// ISO 4217 currency list.
///
/// Numeric codes are not unique across rows (`XBD` and `XFU` both carry 958),
/// so lookups always go through the alphabetic code.
pub(crate) static ISO_4217: &[SeedRow] = &[
    ("AED", "UAE Dirham", 784, 2, 100),
    ("AFN", "Afghani", 971, 2, 100),
    ("ALL", "Lek", 8, 2, 100),
    ("AMD", "Armenian Dram", 51, 2, 100),
    ("ANG", "Netherlands Antillean Guilder", 532, 2, 100),
    ("AOA", "Kwanza", 973, 2, 100),
    ("ARS", "Argentine Peso", 32, 2, 100),
    ("AUD", "Australian Dollar", 36, 2, 100),
    ("AWG", "Aruban Florin", 533, 2, 100),
    ("AZN", "Azerbaijanian Manat", 944, 2, 100),
    ("BAM", "Convertible Mark", 977, 2, 100),
    ("BBD", "Barbados Dollar", 52, 2, 100),
    ("BDT", "Taka", 50, 2, 100),
    ("BGN", "Bulgarian Lev", 975, 2, 100),
    ("BHD", "Bahraini Dinar", 48, 3, 1000),
    ("BIF", "Burundi Franc", 108, 0, 100),
    ("BMD", "Bermudian Dollar", 60, 2, 100),
    ("BND", "Brunei Dollar", 96, 2, 100),
    ("BOB", "Boliviano", 68, 2, 100),
    ("BOV", "Mvdol", 984, 2, 100),
    ("BRL", "Brazilian Real", 986, 2, 100),
    ("BSD", "Bahamian Dollar", 44, 2, 100),
    ("BTN", "Ngultrum", 64, 2, 100),
    ("BWP", "Pula", 72, 2, 100),
    ("BYR", "Belarussian Ruble", 974, 0, 100),
    ("BZD", "Belize Dollar", 84, 2, 100),
    ("CAD", "Canadian Dollar", 124, 2, 100),
    ("CDF", "Congolese Franc", 976, 2, 100),
    ("CHE", "WIR Euro", 947, 2, 100),
    ("CHF", "Swiss Franc", 756, 2, 100),
    ("CHW", "WIR Franc", 948, 2, 100),
    ("CLF", "Unidades de fomento", 990, 0, 100),
    ("CLP", "Chilean Peso", 152, 0, 100),
    ("CNY", "Yuan Renminbi", 156, 2, 100),
    ("COP", "Colombian Peso", 170, 2, 100),
    ("COU", "Unidad de Valor Real", 970, 2, 100),
    ("CRC", "Costa Rican Colon", 188, 2, 100),
    ("CUC", "Peso Convertible", 931, 2, 100),
    ("CUP", "Cuban Peso", 192, 2, 100),
    ("CVE", "Cape Verde Escudo", 132, 2, 100),
    ("CZK", "Czech Koruna", 203, 2, 100),
    ("DJF", "Djibouti Franc", 262, 0, 100),
    ("DKK", "Danish Krone", 208, 2, 100),
    ("DOP", "Dominican Peso", 214, 2, 100),
    ("DZD", "Algerian Dinar", 12, 2, 100),
    ("EGP", "Egyptian Pound", 818, 2, 100),
    ("ERN", "Nakfa", 232, 2, 100),
    ("ETB", "Ethiopian Birr", 230, 2, 100),
    ("EUR", "Euro", 978, 2, 100),
    ("FJD", "Fiji Dollar", 242, 2, 100),
    ("FKP", "Falkland Islands Pound", 238, 2, 100),
    ("GBP", "Pound Sterling", 826, 2, 100),
    ("GEL", "Lari", 981, 2, 100),
    ("GHS", "Ghana Cedi", 936, 2, 100),
    ("GIP", "Gibraltar Pound", 292, 2, 100),
    ("GMD", "Dalasi", 270, 2, 100),
    ("GNF", "Guinea Franc", 324, 0, 100),
    ("GTQ", "Quetzal", 320, 2, 100),
    ("GYD", "Guyana Dollar", 328, 2, 100),
    ("HKD", "Hong Kong Dollar", 344, 2, 100),
    ("HNL", "Lempira", 340, 2, 100),
    ("HRK", "Croatian Kuna", 191, 2, 100),
    ("HTG", "Gourde", 332, 2, 100),
    ("HUF", "Forint", 348, 2, 100),
    ("IDR", "Rupiah", 360, 2, 100),
    ("ILS", "New Israeli Sheqel", 376, 2, 100),
    ("INR", "Indian Rupee", 356, 2, 100),
    ("IQD", "Iraqi Dinar", 368, 3, 1000),
    ("IRR", "Iranian Rial", 364, 2, 100),
    ("ISK", "Iceland Krona", 352, 0, 100),
    ("JMD", "Jamaican Dollar", 388, 2, 100),
    ("JOD", "Jordanian Dinar", 400, 3, 100),
    ("JPY", "Yen", 392, 0, 1),
    ("KES", "Kenyan Shilling", 404, 2, 100),
    ("KGS", "Som", 417, 2, 100),
    ("KHR", "Riel", 116, 2, 100),
    ("KMF", "Comoro Franc", 174, 0, 100),
    ("KPW", "North Korean Won", 408, 2, 100),
    ("KRW", "Won", 410, 0, 100),
    ("KWD", "Kuwaiti Dinar", 414, 3, 1000),
    ("KYD", "Cayman Islands Dollar", 136, 2, 100),
    ("KZT", "Tenge", 398, 2, 100),
    ("LAK", "Kip", 418, 2, 100),
    ("LBP", "Lebanese Pound", 422, 2, 100),
    ("LKR", "Sri Lanka Rupee", 144, 2, 100),
    ("LRD", "Liberian Dollar", 430, 2, 100),
    ("LSL", "Loti", 426, 2, 100),
    ("LTL", "Lithuanian Litas", 440, 2, 100),
    ("LVL", "Latvian Lats", 428, 2, 100),
    ("LYD", "Libyan Dinar", 434, 3, 1000),
    ("MAD", "Moroccan Dirham", 504, 2, 100),
    ("MDL", "Moldovan Leu", 498, 2, 100),
    ("MGA", "Malagasy Ariary", 969, 2, 5),
    ("MKD", "Denar", 807, 2, 100),
    ("MMK", "Kyat", 104, 2, 100),
    ("MNT", "Tugrik", 496, 2, 100),
    ("MOP", "Pataca", 446, 2, 100),
    ("MRO", "Ouguiya", 478, 2, 5),
    ("MUR", "Mauritius Rupee", 480, 2, 100),
    ("MVR", "Rufiyaa", 462, 2, 100),
    ("MWK", "Kwacha", 454, 2, 100),
    ("MXN", "Mexican Peso", 484, 2, 100),
    ("MXV", "Mexican Unidad de Inversion (UDI)", 979, 2, 100),
    ("MYR", "Malaysian Ringgit", 458, 2, 100),
    ("MZN", "Mozambique Metical", 943, 2, 100),
    ("NAD", "Namibia Dollar", 516, 2, 100),
    ("NGN", "Naira", 566, 2, 100),
    ("NIO", "Cordoba Oro", 558, 2, 100),
    ("NOK", "Norwegian Krone", 578, 2, 100),
    ("NPR", "Nepalese Rupee", 524, 2, 100),
    ("NZD", "New Zealand Dollar", 554, 2, 100),
    ("OMR", "Rial Omani", 512, 3, 1000),
    ("PAB", "Balboa", 590, 2, 100),
    ("PEN", "Nuevo Sol", 604, 2, 100),
    ("PGK", "Kina", 598, 2, 100),
    ("PHP", "Philippine Peso", 608, 2, 100),
    ("PKR", "Pakistan Rupee", 586, 2, 100),
    ("PLN", "Zloty", 985, 2, 100),
    ("PYG", "Guarani", 600, 0, 100),
    ("QAR", "Qatari Rial", 634, 2, 100),
    ("RON", "New Romanian Leu", 946, 2, 100),
    ("RSD", "Serbian Dinar", 941, 2, 100),
    ("RUB", "Russian Ruble", 643, 2, 100),
    ("RWF", "Rwanda Franc", 646, 0, 100),
    ("SAR", "Saudi Riyal", 682, 2, 100),
    ("SBD", "Solomon Islands Dollar", 90, 2, 100),
    ("SCR", "Seychelles Rupee", 690, 2, 100),
    ("SDG", "Sudanese Pound", 938, 2, 100),
    ("SEK", "Swedish Krona", 752, 2, 100),
    ("SGD", "Singapore Dollar", 702, 2, 100),
    ("SHP", "Saint Helena Pound", 654, 2, 100),
    ("SLL", "Leone", 694, 2, 100),
    ("SOS", "Somali Shilling", 706, 2, 100),
    ("SRD", "Surinam Dollar", 968, 2, 100),
    ("SSP", "South Sudanese Pound", 728, 2, 100),
    ("STD", "Dobra", 678, 2, 100),
    ("SVC", "El Salvador Colon", 222, 2, 100),
    ("SYP", "Syrian Pound", 760, 2, 100),
    ("SZL", "Lilangeni", 748, 2, 100),
    ("THB", "Baht", 764, 2, 100),
    ("TJS", "Somoni", 972, 2, 100),
    ("TMT", "Turkmenistan New Manat", 934, 2, 100),
    ("TND", "Tunisian Dinar", 788, 3, 1000),
    ("TOP", "Pa’anga", 776, 2, 100),
    ("TRY", "Turkish Lira", 949, 2, 100),
    ("TTD", "Trinidad and Tobago Dollar", 780, 2, 100),
    ("TWD", "New Taiwan Dollar", 901, 2, 100),
    ("TZS", "Tanzanian Shilling", 834, 2, 100),
    ("UAH", "Hryvnia", 980, 2, 100),
    ("UGX", "Uganda Shilling", 800, 0, 100),
    ("USD", "US Dollar", 840, 2, 100),
    ("USN", "US Dollar (Next day)", 997, 2, 100),
    ("USS", "US Dollar (Same day)", 998, 2, 100),
    ("UYI", "Uruguay Peso en Unidades Indexadas (URUIURUI)", 940, 0, 100),
    ("UYU", "Peso Uruguayo", 858, 2, 100),
    ("UZS", "Uzbekistan Sum", 860, 2, 100),
    ("VEF", "Bolivar", 937, 2, 100),
    ("VND", "Dong", 704, 0, 10),
    ("VUV", "Vatu", 548, 0, 1),
    ("WST", "Tala", 882, 2, 100),
    ("XAF", "CFA Franc BEAC", 950, 0, 100),
    ("XAG", "Silver", 961, 0, 100),
    ("XAU", "Gold", 959, 0, 100),
    ("XBA", "Bond Markets Unit European Composite Unit (EURCO)", 955, 0, 100),
    ("XBB", "Bond Markets Unit European Monetary Unit (E.M.U.-6)", 956, 0, 100),
    ("XBC", "Bond Markets Unit European Unit of Account 9 (E.U.A.-9)", 957, 0, 100),
    ("XBD", "Bond Markets Unit European Unit of Account 17 (E.U.A.-17)", 958, 0, 100),
    ("XCD", "East Caribbean Dollar", 951, 2, 100),
    ("XDR", "SDR (Special Drawing Right)", 960, 0, 100),
    ("XFU", "UIC-Franc", 958, 0, 100),
    ("XOF", "CFA Franc BCEAO", 952, 0, 100),
    ("XPD", "Palladium", 964, 0, 100),
    ("XPF", "CFP Franc", 953, 0, 100),
    ("XPT", "Platinum", 962, 0, 100),
    ("XSU", "Sucre", 994, 0, 100),
    ("XTS", "Codes specifically reserved for testing purposes", 963, 0, 100),
    ("XUA", "ADB Unit of Account", 965, 0, 100),
    ("XXX", "The codes assigned for transactions where no currency is involved", 999, 0, 100),
    ("YER", "Yemeni Rial", 886, 2, 100),
    ("ZAR", "Rand", 710, 2, 100),
    ("ZMW", "Zambian Kwacha", 967, 2, 100),
    ("ZWL", "Zimbabwe Dollar", 932, 2, 100),
];
