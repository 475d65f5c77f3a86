use ethio_core::calendar::{
    self, days_in_ethiopian_month, is_ethiopian_leap_year, month_names, weekday_name,
    EthiopianDate, GregorianDate, Script, PAGUME,
};

use super::pad;

pub fn to_ethiopian(date: &str, script: Script, json: bool) {
    let gregorian: GregorianDate = die!(date.parse::<GregorianDate>(), "Error: {}");
    let date = die!(gregorian.to_date(), "Error: {}");
    let c = die!(
        calendar::to_ethiopian_components(date, script),
        "Error converting {gregorian}: {}"
    );
    if json {
        println!("{}", die!(serde_json::to_string_pretty(&c), "Error: {}"));
    } else {
        println!("{} ({})", c.full_date, weekday_name(date, script));
    }
}

pub fn to_gregorian(year: i32, month: u8, day: u8) {
    let eth = die!(EthiopianDate::new(year, month, day), "Error: {}");
    let date = die!(calendar::to_gregorian(eth), "Error converting {eth}: {}");
    println!("{}", GregorianDate::from(date));
}

pub fn today(script: Script) {
    let eth = die!(calendar::current_ethiopian_date(), "Error: {}");
    println!("{}", calendar::format_ethiopian_date(&eth, script));
}

/// One line per month: number, name(s) and length in `year` when given.
pub fn render_months(script: Option<Script>, year: Option<i32>) -> Vec<String> {
    let latin = month_names(Script::Latin);
    let ethiopic = month_names(Script::Ethiopic);
    let width = |names: &[&str]| {
        use unicode_width::UnicodeWidthStr;
        names.iter().map(|n| n.width()).max().unwrap_or(0)
    };
    let (lw, ew) = (width(latin), width(ethiopic));

    (1..=PAGUME)
        .map(|month| {
            let i = usize::from(month - 1);
            let names = match script {
                Some(Script::Latin) => latin[i].to_string(),
                Some(Script::Ethiopic) => ethiopic[i].to_string(),
                None => format!("{}  {}", pad(latin[i], lw), pad(ethiopic[i], ew)),
            };
            let days = year
                .and_then(|y| days_in_ethiopian_month(y, month).ok())
                .map(|d| format!("  {d} days"))
                .unwrap_or_default();
            format!("{month:>2}  {}{days}", names.trim_end())
                .trim_end()
                .to_string()
        })
        .collect()
}

pub fn months(script: Option<Script>, year: Option<i32>) {
    for line in render_months(script, year) {
        println!("{line}");
    }
}

pub fn leap(year: i32) {
    if is_ethiopian_leap_year(year) {
        println!("{year}: leap year (Pagume has 6 days)");
    } else {
        println!("{year}: common year (Pagume has 5 days)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_table_has_thirteen_rows() {
        let rows = render_months(None, None);
        assert_eq!(rows.len(), 13);
        assert!(rows[0].starts_with(" 1  Meskerem"));
        assert!(rows[0].ends_with("መስከረም"));
        assert!(rows[12].starts_with("13  Pagume"));
    }

    #[test]
    fn months_single_script_with_lengths() {
        let rows = render_months(Some(Script::Ethiopic), Some(2015));
        assert_eq!(rows[0], " 1  መስከረም  30 days");
        assert_eq!(rows[12], "13  ጳጉሜ  6 days");
        let rows = render_months(Some(Script::Latin), Some(2016));
        assert_eq!(rows[12], "13  Pagume  5 days");
    }
}
