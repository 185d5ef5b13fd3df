mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;
use tracing::info;

use jpholiday::configuration::Configuration;
use jpholiday::time::calendar::dateinfo::DatedInfo;
use jpholiday::time::calendar::holidayname::HolidayName;
use jpholiday::time::calendar::japanholidaycalendar::JapanHolidayCalendar;
use jpholiday::time::calendardate::{format_iso_date, parse_iso_date};

use crate::cli::{Cli, Command, InfoArgs, RangeArgs, YearArgs};

#[derive(Serialize)]
struct HolidayEntry {
    date: NaiveDate,
    holiday: HolidayName,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Configuration::from_reader(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Configuration::default(),
    };
    info!(?config, "configuration loaded");
    let calendar = JapanHolidayCalendar::from_configuration(&config);

    match cli.command {
        Command::Info(args) => info_cmd(&calendar, &config, args),
        Command::Year(args) => year_cmd(&calendar, &config, args),
        Command::Range(args) => range_cmd(&calendar, &config, args),
    }
}

fn parse_date_arg(date_str: &str) -> Result<NaiveDate> {
    parse_iso_date(date_str).with_context(|| format!("invalid date argument '{date_str}'"))
}

fn info_cmd(calendar: &JapanHolidayCalendar, config: &Configuration, args: InfoArgs) -> Result<()> {
    let mut infos = Vec::with_capacity(args.dates.len());
    for date_str in &args.dates {
        let date = parse_date_arg(date_str)?;
        infos.push(DatedInfo { date, info: calendar.date_info(date) });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    for dated in infos {
        let day = dated
            .info
            .day_of_week
            .map(|d| d.label(config.day_name_style()))
            .unwrap_or_default();
        let holiday = dated
            .info
            .holiday
            .map(|h| h.label(config.holiday_label_style()))
            .unwrap_or_default();
        println!("{}\t{}\t{}", format_iso_date(dated.date), day, holiday);
    }
    Ok(())
}

fn print_holidays(
    calendar: &JapanHolidayCalendar,
    config: &Configuration,
    holidays: Vec<(NaiveDate, HolidayName)>,
    json: bool,
) -> Result<()> {
    if json {
        let entries: Vec<HolidayEntry> = holidays
            .into_iter()
            .map(|(date, holiday)| HolidayEntry { date, holiday })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for (date, holiday) in holidays {
        println!(
            "{}\t{}\t{}",
            format_iso_date(date),
            calendar.day_of_week(date).label(config.day_name_style()),
            holiday.label(config.holiday_label_style())
        );
    }
    Ok(())
}

fn year_cmd(calendar: &JapanHolidayCalendar, config: &Configuration, args: YearArgs) -> Result<()> {
    let holidays = calendar.year_holidays(args.year).iter().collect();
    print_holidays(calendar, config, holidays, args.json)
}

fn range_cmd(calendar: &JapanHolidayCalendar, config: &Configuration, args: RangeArgs) -> Result<()> {
    let start = parse_date_arg(&args.start)?;
    let end = parse_date_arg(&args.end)?;
    let holidays = calendar.holidays_between(start, end);
    print_holidays(calendar, config, holidays, args.json)
}
