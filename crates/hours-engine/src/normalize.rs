//! Free-text normalization: the ordered rewrite passes that turn arbitrary
//! hours text into a constrained alphabet of day codes, digits, colons and
//! dashes.
//!
//! Pass order is load-bearing. Every pass states its precondition on the
//! passes before it; reordering two passes silently corrupts output without
//! any runtime error, so the sequence in [`normalize`] is the single most
//! important invariant in this module and is tested pass group by pass
//! group.
//!
//! Input is expected lowercased and trimmed (the driver does both). The only
//! hard failure in this stage is the day-letter alphabet check near the end;
//! everything before it is a best-effort rewrite.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ParseError, Result};
use crate::locale::Locale;
use crate::model::CLOSED_TOKEN;

/// Run every pass in order. See the module docs for ordering constraints.
pub fn normalize(input: &str, locale: &Locale, now: NaiveDateTime) -> Result<String> {
    let mut s = if RE_TWENTY_FOUR_SEVEN.is_match(input) {
        // Round-the-clock shorthand replaces the whole string; the
        // vocabulary passes below would have nothing left to do.
        "MM-UU 00:00-00:00".to_string()
    } else {
        let s = resolve_relative_days(input, locale, now);
        let s = strip_foreign_chars(&s);
        let s = rewrite_vocabulary(&s);
        rewrite_through_words(&s)
    };
    s = collapse_duplicate_dashes(&s);
    s = remove_filler_words(&s);
    s = replace_day_names(&s, locale);
    s = strip_calendar_dates(&s, locale);
    s = normalize_time_punctuation(&s);
    s = mark_meridiems(&s);
    s = tighten_dashes(&s);
    check_day_alphabet(&s)?;
    s = widen_day_letters(&s);
    s = collapse_spaces(&s);
    s = expand_bare_numbers(&s);
    s = resolve_meridiems(&s);
    Ok(s.trim().to_string())
}

// ── Fixed patterns ──────────────────────────────────────────────────────────

static RE_TWENTY_FOUR_SEVEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"24\s*[\\/*x]\s*7").unwrap());
static RE_TODAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\btoday\b").unwrap());
static RE_TOMORROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"\btomorrow\b").unwrap());
static RE_LONG_DASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\u{2013}\u{2014}]").unwrap());
static RE_FOREIGN_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9:\-. ~]").unwrap());
static RE_EXTRA_COLONS: Lazy<Regex> = Lazy::new(|| Regex::new(r":{2,}").unwrap());
static RE_CLOSED: Lazy<Regex> = Lazy::new(|| Regex::new(r"closed|not open").unwrap());
static RE_APPOINTMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"by appointment( only)?").unwrap());
static RE_WEEKDAYS: Lazy<Regex> = Lazy::new(|| Regex::new(r"weekdays").unwrap());
static RE_WEEKENDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"weekends").unwrap());
static RE_NOON: Lazy<Regex> = Lazy::new(|| Regex::new(r"(12(:00)?\W*)?noon").unwrap());
static RE_MIDNIGHT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(12(:00)?\W*)?mid(night|nite)").unwrap());
static RE_DAILY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"every\s*day|daily|(7|seven) days a week").unwrap());
static RE_ALL_DAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(open\s*)?(24|twenty\W*four)\W*h(ou)?rs?|all day").unwrap());
static RE_COLON_THEN_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\D:)([^ ])").unwrap());
static RE_DUP_DASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").unwrap());
static RE_PERIOD_AS_COLON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{1,2})\.([0-9]{2})").unwrap());
static RE_WORD_COLON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\D+):(\D+)").unwrap());
static RE_LEADING_COLON: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ *:").unwrap());
static RE_TRAILING_COLON: Lazy<Regex> = Lazy::new(|| Regex::new(r": *$").unwrap());
static RE_PM: Lazy<Regex> = Lazy::new(|| Regex::new(r" *pm").unwrap());
static RE_AM: Lazy<Regex> = Lazy::new(|| Regex::new(r" *am").unwrap());
static RE_P: Lazy<Regex> = Lazy::new(|| Regex::new(r" *p").unwrap());
static RE_A: Lazy<Regex> = Lazy::new(|| Regex::new(r" *a").unwrap());
static RE_DASH_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"- +").unwrap());
static RE_SPACE_DASH: Lazy<Regex> = Lazy::new(|| Regex::new(r" +-").unwrap());
static RE_STRAY_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[bcdeghijklnoqvxyz]").unwrap());
static RE_MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());
static RE_SPACE_AA: Lazy<Regex> = Lazy::new(|| Regex::new(r" +AA").unwrap());
static RE_SPACE_PP: Lazy<Regex> = Lazy::new(|| Regex::new(r" +PP").unwrap());
static RE_TWELVE_AM: Lazy<Regex> = Lazy::new(|| Regex::new(r"12(:[0-9]{2}AA)").unwrap());
static RE_PM_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{2})(:[0-9]{2})PP").unwrap());
static RE_INFERABLE_INTERVAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{2}):([0-9]{2})(AA)?-([0-9]{2}):([0-9]{2})(AA)?").unwrap()
});

/// "through" synonyms, replaced in this order. Plain substring matches, so
/// "till" must come before "til".
const THROUGH_WORDS: [&str; 7] = ["through", "thru", "to", "until", "till", "til", "~"];

/// Words that carry no schedule information, matched whole-word and erased.
const FILLER_WORDS: &str = "paste|here|business|operation|times|time|walk-ins|walk ins|\
welcome|dinner|lunch|brunch|breakfast|regular|weekday|weekend|opening|open|now|from|\
hours|hour|our|are|and";

/// Timezone abbreviations, also erased whole-word.
/// See https://en.wikipedia.org/wiki/List_of_time_zone_abbreviations
const TIMEZONE_ABBREVIATIONS: &str = "acdt|acst|act|acwst|adt|aedt|aest|aft|akdt|akst|\
amst|amt|art|ast|awst|azost|azot|azt|bdt|biot|bit|bot|brst|brt|bst|btt|cat|cct|cdt|\
cest|cet|chadt|chast|chot|chost|chst|chut|cist|cit|ckt|clst|clt|cost|cot|cst|ct|cvt|\
cwst|cxt|davt|ddut|dft|easst|east|eat|ect|edt|eest|eet|egst|egt|eit|est|fet|fjt|fkst|\
fkt|fnt|galt|gamt|get|gft|gilt|git|gmt|gst|gyt|hdt|haec|hst|hkt|hmt|hovst|hovt|ict|\
idlw|idt|iot|irdt|irkt|irst|ist|jst|kalt|kgt|kost|krat|kst|lhst|lint|magt|mart|mawt|\
mdt|met|mest|mht|mist|mit|mmt|msk|mst|mut|mvt|myt|nct|ndt|nft|npt|nst|nt|nut|nzdt|\
nzst|omst|orat|pdt|pet|pett|pgt|phot|pht|pkt|pmdt|pmst|pont|pst|pyst|pyt|ret|rott|\
sakt|samt|sast|sbt|sct|sdt|sgt|slst|sret|srt|sst|syot|taht|tha|tft|tjt|tkt|tlt|tmt|\
trt|tot|tvt|ulast|ulat|utc|uyst|uyt|uzt|vet|vlat|volt|vost|vut|wakt|wast|wat|west|\
wet|wit|wst|yakt|yekt";

static RE_KILL_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b(?:{FILLER_WORDS}|{TIMEZONE_ABBREVIATIONS})\b"
    ))
    .unwrap()
});

// ── Passes ──────────────────────────────────────────────────────────────────

/// Rewrite "today"/"tomorrow" into the locale's abbreviated weekday name for
/// the reference timestamp. Must run before day-name replacement so the
/// inserted abbreviation gets picked up like any other day name.
fn resolve_relative_days(s: &str, locale: &Locale, now: NaiveDateTime) -> String {
    let today = now.date();
    let tomorrow = today.succ_opt().unwrap_or(today);
    let s = RE_TODAY.replace_all(s, locale.abbr_day_for(today));
    RE_TOMORROW
        .replace_all(&s, locale.abbr_day_for(tomorrow))
        .into_owned()
}

/// Map long dashes to "-" and everything outside the working alphabet
/// (letters, digits, colon, dash, period, tilde, space) to a space.
fn strip_foreign_chars(s: &str) -> String {
    let s = RE_LONG_DASH.replace_all(s, "-");
    RE_FOREIGN_CHAR.replace_all(&s, " ").into_owned()
}

/// Replace the fixed synonym vocabulary: closure phrases become the closed
/// sentinel, "weekdays"/"weekends"/"daily" become day ranges, "noon" and
/// "midnight" become clock times, "24 hours"/"all day" becomes the all-day
/// interval. Requires foreign characters already stripped so `\W` anchors
/// behave.
fn rewrite_vocabulary(s: &str) -> String {
    let s = RE_EXTRA_COLONS.replace_all(s, ":");
    let s = RE_CLOSED.replace_all(&s, CLOSED_TOKEN);
    let s = RE_APPOINTMENT.replace_all(&s, CLOSED_TOKEN);
    let s = RE_WEEKDAYS.replace_all(&s, "MM-FF");
    let s = RE_WEEKENDS.replace_all(&s, "SS-UU");
    // Midnight before noon: its optional "12" prefix must not swallow a
    // 12:00 the noon rewrite just produced.
    let s = RE_MIDNIGHT.replace_all(&s, "00:00");
    let s = RE_NOON.replace_all(&s, "12:00");
    let s = RE_DAILY.replace_all(&s, "MM-UU");
    let s = RE_ALL_DAY.replace_all(&s, "00:00-00:00");
    RE_COLON_THEN_WORD.replace_all(&s, "${1} ${2}").into_owned()
}

/// Turn every "through" synonym into a dash. Plain substring replacement,
/// matching the fixed vocabulary exactly; runs after the synonym rewrites so
/// phrases like "not open" are already consumed.
fn rewrite_through_words(s: &str) -> String {
    let mut s = s.to_string();
    for word in THROUGH_WORDS {
        s = s.replace(word, "-");
    }
    s
}

fn collapse_duplicate_dashes(s: &str) -> String {
    RE_DUP_DASHES.replace_all(s, "-").into_owned()
}

/// Erase filler words and timezone abbreviations, whole-word.
fn remove_filler_words(s: &str) -> String {
    RE_KILL_WORDS.replace_all(s, "").into_owned()
}

/// Replace locale day names with two-letter day codes. Plural before full
/// before abbreviated, so the longest form wins. The codes are uppercase and
/// therefore inert for every later lowercase-oriented pass.
fn replace_day_names(s: &str, locale: &Locale) -> String {
    let mut s = s.to_string();
    for (day, forms) in locale.day_forms() {
        for form in &forms {
            if !form.is_empty() {
                s = s.replace(form.as_str(), day.code());
            }
        }
    }
    s
}

/// Erase literal calendar dates ("<month> <day>[ <year>]"); they describe
/// exceptions, not the recurring weekly schedule. Must run after day-name
/// replacement so month abbreviations are matched against intact text.
fn strip_calendar_dates(s: &str, locale: &Locale) -> String {
    let mut s = s.to_string();
    for [full, abbr] in locale.month_forms() {
        for name in [full, abbr] {
            if name.is_empty() {
                continue;
            }
            let escaped = regex::escape(&name);
            for pattern in [
                format!(r"{escaped}\.? ?[0-9]{{1,2}},? ?20[0-9]{{2}}"),
                format!(r"{escaped}\.? ?[0-9]{{1,2}}"),
            ] {
                if let Ok(re) = Regex::new(&pattern) {
                    s = re.replace_all(&s, " ").into_owned();
                }
            }
        }
    }
    s
}

/// Period between digits becomes a colon ("9.30" → "9:30"); remaining
/// periods vanish; colons not flanked by digits on both sides were day-list
/// separators and become spaces.
fn normalize_time_punctuation(s: &str) -> String {
    let s = RE_PERIOD_AS_COLON.replace_all(s, "${1}:${2}");
    let s = s.replace('.', "");
    let s = RE_WORD_COLON_WORD.replace_all(&s, "${1} ${2}");
    let s = RE_LEADING_COLON.replace_all(&s, " ");
    RE_TRAILING_COLON.replace_all(&s, " ").into_owned()
}

/// Turn meridiem suffixes into the internal AA/PP markers, most specific
/// first ("pm" before bare "p"). Periods are already gone, so "p.m." arrives
/// here as "pm". The markers are uppercase and survive untouched until
/// [`resolve_meridiems`].
fn mark_meridiems(s: &str) -> String {
    let s = RE_PM.replace_all(s, "PP");
    let s = RE_AM.replace_all(&s, "AA");
    let s = RE_P.replace_all(&s, "PP");
    RE_A.replace_all(&s, "AA").into_owned()
}

/// Close up spaces around dashes, then special-case a string that is nothing
/// but a lone interval: a bare all-day or bare closure applies to the whole
/// week, so it gets the full-week range prefixed.
fn tighten_dashes(s: &str) -> String {
    let s = RE_DASH_SPACE.replace_all(s, "-");
    let s = RE_SPACE_DASH.replace_all(&s, "-");
    let trimmed = s.trim();
    if trimmed == "00:00-00:00" || trimmed == CLOSED_TOKEN {
        return format!("MM-UU{trimmed}");
    }
    s.into_owned()
}

/// The only fatal check in this stage: any lowercase letter outside the
/// m/t/w/r/f/s/u day alphabet is vocabulary the pipeline does not know.
fn check_day_alphabet(s: &str) -> Result<()> {
    if RE_STRAY_LETTER.is_match(s) {
        return Err(ParseError::UnrecognizedText(s.trim().to_string()));
    }
    Ok(())
}

/// Double every remaining single day letter into its two-letter code.
/// Requires the alphabet check to have passed.
fn widen_day_letters(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        match c {
            'm' => out.push_str("MM"),
            't' => out.push_str("TT"),
            'w' => out.push_str("WW"),
            'r' => out.push_str("RR"),
            'f' => out.push_str("FF"),
            's' => out.push_str("SS"),
            'u' => out.push_str("UU"),
            other => out.push(other),
        }
    }
    out
}

fn collapse_spaces(s: &str) -> String {
    let s = RE_MULTI_SPACE.replace_all(s, " ");
    let s = RE_SPACE_AA.replace_all(&s, "AA");
    RE_SPACE_PP.replace_all(&s, "PP").into_owned()
}

// Bare-number expansion. Each (pattern, rewrite) pair zero-pads a 1-2 digit
// hour and/or inserts the missing ":00"/":" so every time reads HH:MM. The
// whole battery repeats five times because a single left-to-right pass
// cannot rewrite overlapping matches ("9-5" needs the second number's
// context restored after the first is rewritten).
static EXPANSIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"([^0-9:])([0-9])([^0-9:])", "${1}0${2}:00${3}"),
        (r"^([0-9])([^0-9:])", "0${1}:00${2}"),
        (r"([^0-9:])([0-9])$", "${1}0${2}:00"),
        (r"([^0-9:])([0-9]{2})([^0-9:])", "${1}${2}:00${3}"),
        (r"^([0-9]{2})([^0-9:])", "${1}:00${2}"),
        (r"([^0-9:])([0-9]{2})$", "${1}${2}:00"),
        (r"([^0-9])([0-9])([0-9]{2}[^0-9])", "${1}0${2}:${3}"),
        (r"^([0-9])([0-9]{2}[^0-9])", "0${1}:${2}"),
        (r"([^0-9])([0-9])([0-9]{2})$", "${1}0${2}:${3}"),
        (r"([^0-9][0-9]{2})([0-9]{2}[^0-9])", "${1}:${2}"),
        (r"^([0-9]{2})([0-9]{2}[^0-9])", "${1}:${2}"),
        (r"([^0-9][0-9]{2})([0-9]{2})$", "${1}:${2}"),
        (r"([^0-9])([0-9]:)", "${1}0${2}"),
        (r"^([0-9]:)", "0${1}"),
    ]
    .into_iter()
    .map(|(pattern, rewrite)| (Regex::new(pattern).unwrap(), rewrite))
    .collect()
});

/// Expand bare 1-2 digit numbers into zero-padded HH:MM.
fn expand_bare_numbers(s: &str) -> String {
    let mut s = s.to_string();
    for _ in 0..5 {
        for (re, rewrite) in EXPANSIONS.iter() {
            s = re.replace_all(&s, *rewrite).into_owned();
        }
    }
    s
}

/// Resolve the AA/PP markers: 12:XX AM is midnight, PM hours move to
/// 24-hour form ((h mod 12) + 12). Afternoon inference runs next, while the
/// AM markers are still visible, and the markers then drop without touching
/// the hour. Requires every time to already read HH:MM.
fn resolve_meridiems(s: &str) -> String {
    let s = RE_TWELVE_AM.replace_all(s, "00${1}");
    let s = RE_PM_TIME.replace_all(&s, |caps: &regex::Captures| {
        let hour: u32 = caps[1].parse().unwrap_or(0);
        format!("{:02}{}", hour % 12 + 12, &caps[2])
    });
    let s = infer_afternoon_closes(&s);
    s.replace("AA", "")
}

/// "9-5" means 09:00–17:00: a bare close strictly before a morning open,
/// landing between 01:00 and 11:59, reads as a 12-hour afternoon time and
/// moves forward twelve hours. A close carrying an explicit AM marker stays
/// an overnight span ("9am-5am" closes at 05:00), as do closes at midnight
/// and zero-length intervals. The rewrite is idempotent, so a canonical
/// re-parse is stable.
fn infer_afternoon_closes(s: &str) -> String {
    RE_INFERABLE_INTERVAL
        .replace_all(s, |caps: &regex::Captures| {
            let field = |ix: usize| -> u8 { caps[ix].parse().unwrap_or(99) };
            let (from_hour, from_minute) = (field(1), field(2));
            let (to_hour, to_minute) = (field(4), field(5));
            let open_marker = caps.get(3).map_or("", |_| "AA");
            let close_is_am = caps.get(6).is_some();

            let afternoon = !close_is_am
                && (to_hour, to_minute) < (from_hour, from_minute)
                && from_hour < 12
                && to_hour >= 1;
            let to_hour = if afternoon { to_hour + 12 } else { to_hour };
            let close_marker = if close_is_am { "AA" } else { "" };
            format!(
                "{from_hour:02}:{from_minute:02}{open_marker}-{to_hour:02}:{to_minute:02}{close_marker}"
            )
        })
        .into_owned()
}

// ── Tests ───────────────────────────────────────────────────────────────────
