//! Built-in formatting rules per language.
//!
//! Names, named formats and number symbols used when locale files do not
//! provide their own under `date.*`, `time.*` and `number.format.*`.

/// Formatting data for one language.
pub struct FormatRules {
    /// January first.
    pub month_names: [&'static str; 12],
    pub abbr_month_names: [&'static str; 12],
    /// Sunday first.
    pub day_names: [&'static str; 7],
    pub abbr_day_names: [&'static str; 7],
    pub date_formats: &'static [(&'static str, &'static str)],
    pub time_formats: &'static [(&'static str, &'static str)],
    pub am: &'static str,
    pub pm: &'static str,
    pub delimiter: &'static str,
    pub separator: &'static str,
    pub minus: &'static str,
    pub ordinal: fn(u32) -> String,
}

impl FormatRules {
    /// A named date or time format.
    pub fn format(&self, kind: FormatKind, name: &str) -> Option<&'static str> {
        let formats = match kind {
            FormatKind::Date => self.date_formats,
            FormatKind::Time => self.time_formats,
        };
        formats
            .iter()
            .find(|(format_name, _)| *format_name == name)
            .map(|(_, pattern)| *pattern)
    }
}

/// Which family of named formats to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    Date,
    Time,
}

impl FormatKind {
    /// Top-level key of the family in locale files.
    pub fn key(&self) -> &'static str {
        match self {
            FormatKind::Date => "date",
            FormatKind::Time => "time",
        }
    }
}

/// Built-in rules for a base language, if there are any.
pub fn builtin_rules(lang: &str) -> Option<&'static FormatRules> {
    match lang {
        "en" => Some(&EN),
        "ru" => Some(&RU),
        "de" => Some(&DE),
        _ => None,
    }
}

/// English rules, the last resort for every lookup.
pub fn english() -> &'static FormatRules {
    &EN
}

fn english_ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn dotted_ordinal(n: u32) -> String {
    format!("{n}.")
}

fn plain_ordinal(n: u32) -> String {
    n.to_string()
}

static EN: FormatRules = FormatRules {
    month_names: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    abbr_month_names: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    day_names: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    abbr_day_names: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    date_formats: &[
        ("default", "%Y-%m-%d"),
        ("short", "%d %b"),
        ("long", "%B %d, %Y"),
        ("full", "%O of %B, %Y"),
    ],
    time_formats: &[
        ("default", "%a, %d %b %Y %H:%M:%S %z"),
        ("short", "%d %b %H:%M"),
        ("long", "%B %d, %Y %H:%M"),
        ("full", "%O of %B, %Y %H:%M"),
    ],
    am: "am",
    pm: "pm",
    delimiter: ",",
    separator: ".",
    minus: "\u{2212}",
    ordinal: english_ordinal,
};

static RU: FormatRules = FormatRules {
    month_names: [
        "января",
        "февраля",
        "марта",
        "апреля",
        "мая",
        "июня",
        "июля",
        "августа",
        "сентября",
        "октября",
        "ноября",
        "декабря",
    ],
    abbr_month_names: [
        "янв.", "февр.", "марта", "апр.", "мая", "июня", "июля", "авг.", "сент.", "окт.", "нояб.",
        "дек.",
    ],
    day_names: [
        "воскресенье",
        "понедельник",
        "вторник",
        "среда",
        "четверг",
        "пятница",
        "суббота",
    ],
    abbr_day_names: ["Вс", "Пн", "Вт", "Ср", "Чт", "Пт", "Сб"],
    date_formats: &[
        ("default", "%d.%m.%Y"),
        ("short", "%d %b"),
        ("long", "%d %B %Y"),
        ("full", "%-d %B %Y"),
    ],
    time_formats: &[
        ("default", "%a, %d %b %Y, %H:%M:%S %z"),
        ("short", "%d %b, %H:%M"),
        ("long", "%d %B %Y, %H:%M"),
        ("full", "%-d %B %Y, %H:%M"),
    ],
    am: "утра",
    pm: "вечера",
    delimiter: "\u{a0}",
    separator: ",",
    minus: "\u{2212}",
    ordinal: plain_ordinal,
};

static DE: FormatRules = FormatRules {
    month_names: [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ],
    abbr_month_names: [
        "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
    ],
    day_names: [
        "Sonntag",
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
    ],
    abbr_day_names: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
    date_formats: &[
        ("default", "%d.%m.%Y"),
        ("short", "%e. %b"),
        ("long", "%e. %B %Y"),
        ("full", "%O %B %Y"),
    ],
    time_formats: &[
        ("default", "%a, %d. %b %Y, %H:%M:%S %z"),
        ("short", "%d. %b, %H:%M"),
        ("long", "%d. %B %Y, %H:%M"),
        ("full", "%O %B %Y, %H:%M"),
    ],
    am: "vormittags",
    pm: "nachmittags",
    delimiter: ".",
    separator: ",",
    minus: "\u{2212}",
    ordinal: dotted_ordinal,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_ordinals() {
        let ordinal = english().ordinal;
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(22), "22nd");
    }

    #[test]
    fn named_formats_by_kind() {
        let ru = builtin_rules("ru").unwrap();
        assert_eq!(ru.format(FormatKind::Date, "default"), Some("%d.%m.%Y"));
        assert_eq!(ru.format(FormatKind::Time, "unknown"), None);
        assert!(builtin_rules("xx").is_none());
    }
}
