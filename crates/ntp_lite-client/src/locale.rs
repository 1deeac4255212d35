// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Weekday and month names used by the `%a %A %b %B` format codes.
//!
//! Tables are static data indexed by [`DateTime::weekday`] (0 = Sunday) and
//! [`DateTime::month`] - 1. Unknown language tags fall back to English.
//!
//! [`DateTime::weekday`]: crate::calendar::DateTime::weekday
//! [`DateTime::month`]: crate::calendar::DateTime::month

/// Names for one language.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DateLanguage {
    /// Abbreviated weekday names, Sunday first.
    pub short_weekdays: [&'static str; 7],
    /// Full weekday names, Sunday first.
    pub long_weekdays: [&'static str; 7],
    /// Abbreviated month names, January first.
    pub short_months: [&'static str; 12],
    /// Full month names, January first.
    pub long_months: [&'static str; 12],
}

impl DateLanguage {
    /// Table for `tag` (ASCII case-insensitive), or [`ENGLISH`] if none matches.
    pub fn lookup(tag: &str) -> &'static DateLanguage {
        DATE_LANGUAGES
            .iter()
            .find(|(t, _)| t.eq_ignore_ascii_case(tag))
            .map_or(&ENGLISH, |(_, lang)| lang)
    }

    /// Abbreviated name for `weekday` (0 = Sunday). Out-of-range values wrap.
    pub fn short_weekday(&self, weekday: u8) -> &'static str {
        self.short_weekdays[usize::from(weekday % 7)]
    }

    /// Full name for `weekday` (0 = Sunday). Out-of-range values wrap.
    pub fn long_weekday(&self, weekday: u8) -> &'static str {
        self.long_weekdays[usize::from(weekday % 7)]
    }

    /// Abbreviated name for `month` (1 to 12).
    pub fn short_month(&self, month: u8) -> &'static str {
        self.short_months[month_index(month)]
    }

    /// Full name for `month` (1 to 12).
    pub fn long_month(&self, month: u8) -> &'static str {
        self.long_months[month_index(month)]
    }
}

fn month_index(month: u8) -> usize {
    usize::from(month.saturating_sub(1) % 12)
}

/// English names. The fallback for unknown tags.
pub const ENGLISH: DateLanguage = DateLanguage {
    short_weekdays: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    long_weekdays: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    short_months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    long_months: [
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
};

const SPANISH: DateLanguage = DateLanguage {
    short_weekdays: ["Dom", "Lun", "Mar", "Mié", "Jue", "Vie", "Sáb"],
    long_weekdays: [
        "Domingo",
        "Lunes",
        "Martes",
        "Miércoles",
        "Jueves",
        "Viernes",
        "Sábado",
    ],
    short_months: [
        "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
    ],
    long_months: [
        "Enero",
        "Febrero",
        "Marzo",
        "Abril",
        "Mayo",
        "Junio",
        "Julio",
        "Agosto",
        "Septiembre",
        "Octubre",
        "Noviembre",
        "Diciembre",
    ],
};

const FRENCH: DateLanguage = DateLanguage {
    short_weekdays: ["Dim", "Lun", "Mar", "Mer", "Jeu", "Ven", "Sam"],
    long_weekdays: [
        "Dimanche", "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi",
    ],
    short_months: [
        "Janv", "Févr", "Mars", "Avr", "Mai", "Juin", "Juil", "Août", "Sept", "Oct", "Nov",
        "Déc",
    ],
    long_months: [
        "Janvier",
        "Février",
        "Mars",
        "Avril",
        "Mai",
        "Juin",
        "Juillet",
        "Août",
        "Septembre",
        "Octobre",
        "Novembre",
        "Décembre",
    ],
};

const GERMAN: DateLanguage = DateLanguage {
    short_weekdays: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
    long_weekdays: [
        "Sonntag",
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
    ],
    short_months: [
        "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
    ],
    long_months: [
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
};

const ITALIAN: DateLanguage = DateLanguage {
    short_weekdays: ["Dom", "Lun", "Mar", "Mer", "Gio", "Ven", "Sab"],
    long_weekdays: [
        "Domenica",
        "Lunedì",
        "Martedì",
        "Mercoledì",
        "Giovedì",
        "Venerdì",
        "Sabato",
    ],
    short_months: [
        "Gen", "Feb", "Mar", "Apr", "Mag", "Giu", "Lug", "Ago", "Set", "Ott", "Nov", "Dic",
    ],
    long_months: [
        "Gennaio",
        "Febbraio",
        "Marzo",
        "Aprile",
        "Maggio",
        "Giugno",
        "Luglio",
        "Agosto",
        "Settembre",
        "Ottobre",
        "Novembre",
        "Dicembre",
    ],
};

const PORTUGUESE: DateLanguage = DateLanguage {
    short_weekdays: ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"],
    long_weekdays: [
        "Domingo",
        "Segunda-feira",
        "Terça-feira",
        "Quarta-feira",
        "Quinta-feira",
        "Sexta-feira",
        "Sábado",
    ],
    short_months: [
        "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
    ],
    long_months: [
        "Janeiro",
        "Fevereiro",
        "Março",
        "Abril",
        "Maio",
        "Junho",
        "Julho",
        "Agosto",
        "Setembro",
        "Outubro",
        "Novembro",
        "Dezembro",
    ],
};

const DUTCH: DateLanguage = DateLanguage {
    short_weekdays: ["Zo", "Ma", "Di", "Wo", "Do", "Vr", "Za"],
    long_weekdays: [
        "Zondag",
        "Maandag",
        "Dinsdag",
        "Woensdag",
        "Donderdag",
        "Vrijdag",
        "Zaterdag",
    ],
    short_months: [
        "Jan", "Feb", "Mrt", "Apr", "Mei", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dec",
    ],
    long_months: [
        "Januari",
        "Februari",
        "Maart",
        "April",
        "Mei",
        "Juni",
        "Juli",
        "Augustus",
        "September",
        "Oktober",
        "November",
        "December",
    ],
};

/// Every shipped language, keyed by tag.
pub static DATE_LANGUAGES: &[(&str, DateLanguage)] = &[
    ("en", ENGLISH),
    ("es", SPANISH),
    ("fr", FRENCH),
    ("de", GERMAN),
    ("it", ITALIAN),
    ("pt", PORTUGUESE),
    ("nl", DUTCH),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_tags() {
        assert_eq!(DateLanguage::lookup("de").long_weekday(0), "Sonntag");
        assert_eq!(DateLanguage::lookup("fr").long_month(8), "Août");
        assert_eq!(DateLanguage::lookup("es").short_weekday(3), "Mié");
        assert_eq!(DateLanguage::lookup("nl").short_month(3), "Mrt");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(DateLanguage::lookup("IT"), DateLanguage::lookup("it"));
    }

    #[test]
    fn test_unknown_tag_falls_back_to_english() {
        assert_eq!(DateLanguage::lookup("xx"), &ENGLISH);
        assert_eq!(DateLanguage::lookup(""), &ENGLISH);
    }

    #[test]
    fn test_out_of_range_indices_wrap() {
        assert_eq!(ENGLISH.short_weekday(7), "Sun");
        assert_eq!(ENGLISH.long_month(0), "January");
        assert_eq!(ENGLISH.long_month(13), "January");
    }

    #[test]
    fn test_all_tables_complete() {
        for (tag, lang) in DATE_LANGUAGES {
            for name in lang
                .short_weekdays
                .iter()
                .chain(&lang.long_weekdays)
                .chain(&lang.short_months)
                .chain(&lang.long_months)
            {
                assert!(!name.is_empty(), "empty name in {tag}");
            }
        }
    }
}
