/// Maximum valid year (inclusive), shared by all calendar systems
pub const MAX_YEAR: u16 = 9999;

/// First year, month and day, used for lower bounds
pub const MIN_YEAR: u16 = 1;
pub const MIN_MONTH: u8 = 1;
pub const MIN_DAY: u8 = 1;

/// Month counts per calendar system
pub const GREGORIAN_MONTHS_PER_YEAR: u8 = 12;
pub const ETHIOPIAN_MONTHS_PER_YEAR: u8 = 13;
pub const HIJRI_MONTHS_PER_YEAR: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Days in each of the twelve regular Ethiopian months
pub const ETHIOPIAN_MONTH_DAYS: u8 = 30;
/// The epagomenal month (Pagume)
pub const PAGUME: u8 = 13;
pub const PAGUME_DAYS: u8 = 5;
pub const PAGUME_DAYS_LEAP: u8 = 6;
/// Ethiopian leap years satisfy `year % 4 == ETHIOPIAN_LEAP_REMAINDER`
pub const ETHIOPIAN_LEAP_REMAINDER: i64 = 3;

/// Days since 0001-01-01 (CE day 1) of Meskerem 1, year 1 of the Ethiopian era
pub(crate) const ETHIOPIAN_EPOCH_CE: i64 = 2796;

/// Hijri months are uniformly 30 days in the arithmetic model
pub const HIJRI_MONTH_DAYS: u8 = 30;
/// Mean lengths used by the arithmetic Hijri model
pub const HIJRI_MEAN_YEAR_DAYS: f64 = 354.367;
pub const HIJRI_MEAN_MONTH_DAYS: f64 = 29.53;
/// Gregorian 0622-07-16 as CE day number
pub(crate) const HIJRI_EPOCH_CE: i64 = 227_012;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

pub const DAYS_PER_WEEK: usize = 7;
/// Every month grid is padded to six weeks
pub const GRID_WEEKS: usize = 6;
pub const GRID_CELLS: usize = DAYS_PER_WEEK * GRID_WEEKS;

/// Default upper bound on explicit batch size, enforced by the transport layer
pub const DEFAULT_MAX_BATCH_SIZE: usize = 100;
/// Default upper bound on the inclusive day count of a range conversion
pub const DEFAULT_MAX_RANGE_DAYS: u32 = 1000;

pub const GREGORIAN_MONTH_NAMES: [&str; 12] = [
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
];

pub const ETHIOPIAN_MONTH_NAMES: [&str; 13] = [
    "Mäskäräm",
    "Ṭiqimt",
    "Ḫidar",
    "Taḫśaś",
    "Ṭirr",
    "Yäkatit",
    "Mägabit",
    "Miyazya",
    "Gənbot",
    "Säne",
    "Ḥamle",
    "Nähäse",
    "Ṗagume",
];

pub const HIJRI_MONTH_NAMES: [&str; 12] = [
    "Muḥarram",
    "Ṣafar",
    "Rabīʿ al-Awwal",
    "Rabīʿ al-Thānī",
    "Jumādā al-Ūlā",
    "Jumādā al-Thāniya",
    "Rajab",
    "Shaʿbān",
    "Ramaḍān",
    "Shawwāl",
    "Dhū al-Qaʿda",
    "Dhū al-Ḥijja",
];

/// Day names, Sunday first
pub const GREGORIAN_DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const ETHIOPIAN_DAY_NAMES: [&str; 7] = ["እሑድ", "ሰኞ", "ማክሰኞ", "ረቡዕ", "ሐሙስ", "ዓርብ", "ቅዳሜ"];

pub const HIJRI_DAY_NAMES: [&str; 7] = [
    "al-Aḥad",
    "al-Ithnayn",
    "al-Thulāthāʾ",
    "al-Arbiʿāʾ",
    "al-Khamīs",
    "al-Jumuʿah",
    "al-Sabt",
];
