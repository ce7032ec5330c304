// 📚 Built-in Format Table
//
// Every id below is persisted in saved dashboard configuration.
// Ids are a public contract: add freely, never rename or remove.
// Display names and category grouping may change.

use crate::date_time::{DateStyle, Interval, TimeUnit};
use crate::formatter::ValueFormatter;
use crate::registry::FormatCategory;

/// Suffixes for the "short" count format.
const SHORT_SUFFIXES: [&str; 9] = ["", " K", " Mil", " Bil", " Tri", " Quadr", " Quint", " Sext", " Sept"];

/// The built-in categories, in menu order.
pub fn default_categories() -> Vec<FormatCategory> {
    vec![
        FormatCategory::new("none")
            .with("none", "none", ValueFormatter::Fixed)
            .with("short", "short", ValueFormatter::scaled(1000.0, SHORT_SUFFIXES))
            .with("percent (0-100)", "percent", ValueFormatter::Percent)
            .with("percent (0.0-1.0)", "percentunit", ValueFormatter::PercentUnit)
            .with("Humidity (%H)", "humidity", ValueFormatter::fixed_unit("%H"))
            .with("decibel", "dB", ValueFormatter::fixed_unit("dB"))
            .with("hexadecimal (0x)", "hex0x", ValueFormatter::Hex0x)
            .with("hexadecimal", "hex", ValueFormatter::Hex)
            .with("scientific notation", "sci", ValueFormatter::Scientific)
            .with("locale format", "locale", ValueFormatter::Locale),

        FormatCategory::new("acceleration")
            .with("Meters/sec²", "accMS2", ValueFormatter::fixed_unit("m/sec²"))
            .with("Feet/sec²", "accFS2", ValueFormatter::fixed_unit("f/sec²"))
            .with("G unit", "accG", ValueFormatter::fixed_unit("g")),

        FormatCategory::new("angle")
            .with("Degrees (°)", "degree", ValueFormatter::fixed_unit("°"))
            .with("Radians", "radian", ValueFormatter::fixed_unit("rad"))
            .with("Gradian", "grad", ValueFormatter::fixed_unit("grad")),

        FormatCategory::new("area")
            .with("Square Meters (m²)", "areaM2", ValueFormatter::fixed_unit("m²"))
            .with("Square Feet (ft²)", "areaF2", ValueFormatter::fixed_unit("ft²"))
            .with("Square Miles (mi²)", "areaMI2", ValueFormatter::fixed_unit("mi²")),

        FormatCategory::new("computation throughput")
            .with("FLOP/s", "flops", ValueFormatter::decimal_si("FLOP/s", 0))
            .with("MFLOP/s", "mflops", ValueFormatter::decimal_si("FLOP/s", 2))
            .with("GFLOP/s", "gflops", ValueFormatter::decimal_si("FLOP/s", 3))
            .with("TFLOP/s", "tflops", ValueFormatter::decimal_si("FLOP/s", 4))
            .with("PFLOP/s", "pflops", ValueFormatter::decimal_si("FLOP/s", 5))
            .with("EFLOP/s", "eflops", ValueFormatter::decimal_si("FLOP/s", 6)),

        FormatCategory::new("concentration")
            .with("parts-per-million (ppm)", "ppm", ValueFormatter::fixed_unit("ppm"))
            .with("parts-per-billion (ppb)", "conppb", ValueFormatter::fixed_unit("ppb"))
            .with("nanogram per cubic meter (ng/m³)", "conngm3", ValueFormatter::fixed_unit("ng/m³"))
            .with("nanogram per normal cubic meter (ng/Nm³)", "conngNm3", ValueFormatter::fixed_unit("ng/Nm³"))
            .with("microgram per cubic meter (μg/m³)", "conμgm3", ValueFormatter::fixed_unit("μg/m³"))
            .with("microgram per normal cubic meter (μg/Nm³)", "conμgNm3", ValueFormatter::fixed_unit("μg/Nm³"))
            .with("milligram per cubic meter (mg/m³)", "conmgm3", ValueFormatter::fixed_unit("mg/m³"))
            .with("milligram per normal cubic meter (mg/Nm³)", "conmgNm3", ValueFormatter::fixed_unit("mg/Nm³"))
            .with("gram per cubic meter (g/m³)", "congm3", ValueFormatter::fixed_unit("g/m³"))
            .with("gram per normal cubic meter (g/Nm³)", "congNm3", ValueFormatter::fixed_unit("g/Nm³"))
            .with("milligrams per decilitre (mg/dL)", "conmgdL", ValueFormatter::fixed_unit("mg/dL"))
            .with("millimoles per litre (mmol/L)", "conmmolL", ValueFormatter::fixed_unit("mmol/L")),

        FormatCategory::new("currency")
            .with("Dollars ($)", "currencyUSD", ValueFormatter::currency("$"))
            .with("Pounds (£)", "currencyGBP", ValueFormatter::currency("£"))
            .with("Euro (€)", "currencyEUR", ValueFormatter::currency("€"))
            .with("Yen (¥)", "currencyJPY", ValueFormatter::currency("¥"))
            .with("Rubles (₽)", "currencyRUB", ValueFormatter::currency("₽"))
            .with("Hryvnias (₴)", "currencyUAH", ValueFormatter::currency("₴"))
            .with("Real (R$)", "currencyBRL", ValueFormatter::currency("R$"))
            .with("Danish Krone (kr)", "currencyDKK", ValueFormatter::currency("kr"))
            .with("Icelandic Króna (kr)", "currencyISK", ValueFormatter::currency("kr"))
            .with("Norwegian Krone (kr)", "currencyNOK", ValueFormatter::currency("kr"))
            .with("Swedish Krona (kr)", "currencySEK", ValueFormatter::currency("kr"))
            .with("Czech koruna (czk)", "currencyCZK", ValueFormatter::currency("czk"))
            .with("Swiss franc (CHF)", "currencyCHF", ValueFormatter::currency("CHF"))
            .with("Polish Złoty (PLN)", "currencyPLN", ValueFormatter::currency("PLN"))
            .with("Bitcoin (฿)", "currencyBTC", ValueFormatter::currency("฿")),

        FormatCategory::new("data (IEC)")
            .with("bits", "bits", ValueFormatter::binary_si("b", 0))
            .with("bytes", "bytes", ValueFormatter::binary_si("B", 0))
            .with("kibibytes", "kbytes", ValueFormatter::binary_si("B", 1))
            .with("mebibytes", "mbytes", ValueFormatter::binary_si("B", 2))
            .with("gibibytes", "gbytes", ValueFormatter::binary_si("B", 3)),

        FormatCategory::new("data (Metric)")
            .with("bits", "decbits", ValueFormatter::decimal_si("b", 0))
            .with("bytes", "decbytes", ValueFormatter::decimal_si("B", 0))
            .with("kilobytes", "deckbytes", ValueFormatter::decimal_si("B", 1))
            .with("megabytes", "decmbytes", ValueFormatter::decimal_si("B", 2))
            .with("gigabytes", "decgbytes", ValueFormatter::decimal_si("B", 3)),

        FormatCategory::new("data rate")
            .with("packets/sec", "pps", ValueFormatter::decimal_si("pps", 0))
            .with("bits/sec", "bps", ValueFormatter::decimal_si("bps", 0))
            .with("bytes/sec", "Bps", ValueFormatter::decimal_si("B/s", 0))
            .with("kilobytes/sec", "KBs", ValueFormatter::decimal_si("Bs", 1))
            .with("kilobits/sec", "Kbits", ValueFormatter::decimal_si("bps", 1))
            .with("megabytes/sec", "MBs", ValueFormatter::decimal_si("Bs", 2))
            .with("megabits/sec", "Mbits", ValueFormatter::decimal_si("bps", 2))
            .with("gigabytes/sec", "GBs", ValueFormatter::decimal_si("Bs", 3))
            .with("gigabits/sec", "Gbits", ValueFormatter::decimal_si("bps", 3)),

        FormatCategory::new("date & time")
            .with("YYYY-MM-DD HH:mm:ss", "dateTimeAsIso", ValueFormatter::Date(DateStyle::Iso))
            .with("DD/MM/YYYY h:mm:ss a", "dateTimeAsUS", ValueFormatter::Date(DateStyle::Us))
            .with("From Now", "dateTimeFromNow", ValueFormatter::Date(DateStyle::FromNow)),

        FormatCategory::new("energy")
            .with("Watt (W)", "watt", ValueFormatter::decimal_si("W", 0))
            .with("Kilowatt (kW)", "kwatt", ValueFormatter::decimal_si("W", 1))
            .with("Milliwatt (mW)", "mwatt", ValueFormatter::decimal_si("W", -1))
            .with("Watt per square meter (W/m²)", "Wm2", ValueFormatter::fixed_unit("W/m²"))
            .with("Volt-ampere (VA)", "voltamp", ValueFormatter::decimal_si("VA", 0))
            .with("Kilovolt-ampere (kVA)", "kvoltamp", ValueFormatter::decimal_si("VA", 1))
            .with("Volt-ampere reactive (var)", "voltampreact", ValueFormatter::decimal_si("var", 0))
            .with("Kilovolt-ampere reactive (kvar)", "kvoltampreact", ValueFormatter::decimal_si("var", 1))
            .with("Watt-hour (Wh)", "watth", ValueFormatter::decimal_si("Wh", 0))
            .with("Kilowatt-hour (kWh)", "kwatth", ValueFormatter::decimal_si("Wh", 1))
            .with("Kilowatt-min (kWm)", "kwattm", ValueFormatter::decimal_si("W/Min", 1))
            .with("Joule (J)", "joule", ValueFormatter::decimal_si("J", 0))
            .with("Electron volt (eV)", "ev", ValueFormatter::decimal_si("eV", 0))
            .with("Ampere (A)", "amp", ValueFormatter::decimal_si("A", 0))
            .with("Kiloampere (kA)", "kamp", ValueFormatter::decimal_si("A", 1))
            .with("Milliampere (mA)", "mamp", ValueFormatter::decimal_si("A", -1))
            .with("Volt (V)", "volt", ValueFormatter::decimal_si("V", 0))
            .with("Kilovolt (kV)", "kvolt", ValueFormatter::decimal_si("V", 1))
            .with("Millivolt (mV)", "mvolt", ValueFormatter::decimal_si("V", -1))
            .with("Decibel-milliwatt (dBm)", "dBm", ValueFormatter::decimal_si("dBm", 0))
            .with("Ohm (Ω)", "ohm", ValueFormatter::decimal_si("Ω", 0))
            .with("Lumens (Lm)", "lumens", ValueFormatter::decimal_si("Lm", 0)),

        FormatCategory::new("flow")
            .with("Gallons/min (gpm)", "flowgpm", ValueFormatter::fixed_unit("gpm"))
            .with("Cubic meters/sec (cms)", "flowcms", ValueFormatter::fixed_unit("cms"))
            .with("Cubic feet/sec (cfs)", "flowcfs", ValueFormatter::fixed_unit("cfs"))
            .with("Cubic feet/min (cfm)", "flowcfm", ValueFormatter::fixed_unit("cfm"))
            .with("Litre/hour", "litreh", ValueFormatter::fixed_unit("l/h"))
            .with("Litre/min (l/min)", "flowlpm", ValueFormatter::fixed_unit("l/min"))
            .with("milliLitre/min (mL/min)", "flowmlpm", ValueFormatter::fixed_unit("mL/min")),

        FormatCategory::new("force")
            .with("Newton-meters (Nm)", "forceNm", ValueFormatter::decimal_si("Nm", 0))
            .with("Kilonewton-meters (kNm)", "forcekNm", ValueFormatter::decimal_si("Nm", 1))
            .with("Newtons (N)", "forceN", ValueFormatter::decimal_si("N", 0))
            .with("Kilonewtons (kN)", "forcekN", ValueFormatter::decimal_si("N", 1)),

        FormatCategory::new("hash rate")
            .with("hashes/sec", "Hs", ValueFormatter::decimal_si("H/s", 0))
            .with("kilohashes/sec", "KHs", ValueFormatter::decimal_si("H/s", 1))
            .with("megahashes/sec", "MHs", ValueFormatter::decimal_si("H/s", 2))
            .with("gigahashes/sec", "GHs", ValueFormatter::decimal_si("H/s", 3))
            .with("terahashes/sec", "THs", ValueFormatter::decimal_si("H/s", 4))
            .with("petahashes/sec", "PHs", ValueFormatter::decimal_si("H/s", 5))
            .with("exahashes/sec", "EHs", ValueFormatter::decimal_si("H/s", 6)),

        FormatCategory::new("mass")
            .with("milligram (mg)", "massmg", ValueFormatter::decimal_si("g", -1))
            .with("gram (g)", "massg", ValueFormatter::decimal_si("g", 0))
            .with("kilogram (kg)", "masskg", ValueFormatter::decimal_si("g", 1))
            .with("metric ton (t)", "masst", ValueFormatter::fixed_unit("t")),

        FormatCategory::new("length")
            .with("millimetre (mm)", "lengthmm", ValueFormatter::decimal_si("m", -1))
            .with("feet (ft)", "lengthft", ValueFormatter::fixed_unit("ft"))
            .with("meter (m)", "lengthm", ValueFormatter::decimal_si("m", 0))
            .with("kilometer (km)", "lengthkm", ValueFormatter::decimal_si("m", 1))
            .with("mile (mi)", "lengthmi", ValueFormatter::fixed_unit("mi")),

        FormatCategory::new("pressure")
            .with("Millibars", "pressurembar", ValueFormatter::decimal_si("bar", -1))
            .with("Bars", "pressurebar", ValueFormatter::decimal_si("bar", 0))
            .with("Kilobars", "pressurekbar", ValueFormatter::decimal_si("bar", 1))
            .with("Hectopascals", "pressurehpa", ValueFormatter::fixed_unit("hPa"))
            .with("Kilopascals", "pressurekpa", ValueFormatter::fixed_unit("kPa"))
            .with("Inches of mercury", "pressurehg", ValueFormatter::fixed_unit("\"Hg"))
            .with("PSI", "pressurepsi", ValueFormatter::scaled(1000.0, ["psi", "ksi", "Mpsi"])),

        FormatCategory::new("radiation")
            .with("Becquerel (Bq)", "radbq", ValueFormatter::decimal_si("Bq", 0))
            .with("curie (Ci)", "radci", ValueFormatter::decimal_si("Ci", 0))
            .with("Gray (Gy)", "radgy", ValueFormatter::decimal_si("Gy", 0))
            .with("rad", "radrad", ValueFormatter::decimal_si("rad", 0))
            .with("Sievert (Sv)", "radsv", ValueFormatter::decimal_si("Sv", 0))
            .with("rem", "radrem", ValueFormatter::decimal_si("rem", 0))
            .with("Exposure (C/kg)", "radexpckg", ValueFormatter::decimal_si("C/kg", 0))
            .with("roentgen (R)", "radr", ValueFormatter::decimal_si("R", 0))
            .with("Sievert/hour (Sv/h)", "radsvh", ValueFormatter::decimal_si("Sv/h", 0)),

        FormatCategory::new("temperature")
            .with("Celsius (°C)", "celsius", ValueFormatter::fixed_unit("°C"))
            .with("Farenheit (°F)", "farenheit", ValueFormatter::fixed_unit("°F"))
            .with("Kelvin (K)", "kelvin", ValueFormatter::fixed_unit("K")),

        FormatCategory::new("time")
            .with("Hertz (1/s)", "hertz", ValueFormatter::decimal_si("Hz", 0))
            .with("nanoseconds (ns)", "ns", ValueFormatter::Time(TimeUnit::Nanoseconds))
            .with("microseconds (µs)", "µs", ValueFormatter::Time(TimeUnit::Microseconds))
            .with("milliseconds (ms)", "ms", ValueFormatter::Time(TimeUnit::Milliseconds))
            .with("seconds (s)", "s", ValueFormatter::Time(TimeUnit::Seconds))
            .with("minutes (m)", "m", ValueFormatter::Time(TimeUnit::Minutes))
            .with("hours (h)", "h", ValueFormatter::Time(TimeUnit::Hours))
            .with("days (d)", "d", ValueFormatter::Time(TimeUnit::Days))
            .with("duration (ms)", "dtdurationms", ValueFormatter::Duration(Interval::Millisecond))
            .with("duration (s)", "dtdurations", ValueFormatter::Duration(Interval::Second))
            .with("duration (hh:mm:ss)", "dthms", ValueFormatter::DurationHms)
            .with("Timeticks (s/100)", "timeticks", ValueFormatter::Time(TimeUnit::TimeTicks))
            .with("clock (ms)", "clockms", ValueFormatter::Clock { seconds: false })
            .with("clock (s)", "clocks", ValueFormatter::Clock { seconds: true }),

        FormatCategory::new("throughput")
            .with("ops/sec (ops)", "ops", ValueFormatter::count("ops"))
            .with("requests/sec (rps)", "reqps", ValueFormatter::count("reqps"))
            .with("reads/sec (rps)", "rps", ValueFormatter::count("rps"))
            .with("writes/sec (wps)", "wps", ValueFormatter::count("wps"))
            .with("I/O ops/sec (iops)", "iops", ValueFormatter::count("iops"))
            .with("ops/min (opm)", "opm", ValueFormatter::count("opm"))
            .with("reads/min (rpm)", "rpm", ValueFormatter::count("rpm"))
            .with("writes/min (wpm)", "wpm", ValueFormatter::count("wpm")),

        FormatCategory::new("volume")
            .with("millilitre (mL)", "mlitre", ValueFormatter::decimal_si("L", -1))
            .with("litre (L)", "litre", ValueFormatter::decimal_si("L", 0))
            .with("cubic metre", "m3", ValueFormatter::fixed_unit("m³"))
            .with("Normal cubic metre", "Nm3", ValueFormatter::fixed_unit("Nm³"))
            .with("cubic decimetre", "dm3", ValueFormatter::fixed_unit("dm³"))
            .with("gallons", "gallons", ValueFormatter::fixed_unit("gal")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order() {
        let names: Vec<String> = default_categories().into_iter().map(|c| c.name).collect();
        assert_eq!(names.first().map(String::as_str), Some("none"));
        assert_eq!(names.last().map(String::as_str), Some("volume"));
        assert_eq!(names.len(), 23);
    }

    #[test]
    fn test_persisted_ids_present() {
        // ids known to be stored in saved dashboards
        let ids: Vec<String> = default_categories()
            .into_iter()
            .flat_map(|c| c.formats.into_iter().map(|f| f.id))
            .collect();

        for id in [
            "none", "short", "percent", "percentunit", "hex0x", "currencyUSD", "currencyBTC",
            "bytes", "decbytes", "Bps", "Mbits", "dateTimeAsIso", "kwatt", "mwatt", "µs",
            "conμgm3", "dtdurations", "dthms", "clockms", "reqps", "pressurepsi", "m3",
        ] {
            assert!(ids.iter().any(|i| i == id), "missing persisted id {}", id);
        }
        assert_eq!(ids.len(), 170);
    }

    #[test]
    fn test_every_format_has_a_name() {
        for category in default_categories() {
            assert!(!category.formats.is_empty(), "{} is empty", category.name);
            for format in category.formats {
                assert!(!format.name.is_empty());
                assert!(!format.id.is_empty());
            }
        }
    }
}
