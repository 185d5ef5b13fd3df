pub mod configuration;

pub mod time {
    pub mod utility;
    pub mod calendardate;
    pub mod dayname;
    pub mod rangeofdates;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod equinoxholiday;
        pub mod holidayrule;
    }

    pub mod calendar {
        pub mod holidayname;
        pub mod yearholidaymap;
        pub mod yearholidaybuilder;
        pub mod cachebackend;
        pub mod dateinfo;
        pub mod holidaycalendar;
        pub mod japanholidaycalendar;
    }
}
