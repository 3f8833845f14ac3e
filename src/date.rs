#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i32,
    pub month0: u32,
    pub day: u32,
}

pub const OCTOBER: u32 = 9;

impl CalendarDate {
    pub const fn new(year: i32, month0: u32, day: u32) -> Self {
        Self { year, month0, day }
    }

    pub fn is_halloween(&self) -> bool {
        self.month0 == OCTOBER && self.day == 31
    }

    pub fn is_before_halloween(&self) -> bool {
        self.month0 < OCTOBER || (self.month0 == OCTOBER && self.day < 31)
    }
}

#[cfg(target_arch = "wasm32")]
pub fn today() -> CalendarDate {
    let date = js_sys::Date::new_0();
    CalendarDate {
        year: date.get_full_year() as i32,
        month0: date.get_month(),
        day: date.get_date(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn today() -> CalendarDate {
    use chrono::Datelike;

    let now = chrono::Local::now().date_naive();
    CalendarDate {
        year: now.year(),
        month0: now.month0(),
        day: now.day(),
    }
}
