use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::planner::MonthPlanner;
use crate::core::slots::SlotLogic;
use crate::db::pool::DbPool;
use crate::db::queries::{SqliteStore, fetch_or_create_schedule};
use crate::errors::AppResult;
use crate::models::slot::ScheduleSlot;
use crate::ui::grid;
use crate::ui::messages::{header, info, warning};
use crate::utils::date;

/// Show the month calendar, the time slots and the schedule status.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { month, slots_only } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let schedule = fetch_or_create_schedule(&pool.conn, &cfg.schedule_name)?;
        let slots = SlotLogic::list(&mut pool, schedule.id)?;

        if *slots_only {
            print_slots(&slots, &cfg.default_slot_time);
            return Ok(());
        }

        let today = date::today();
        let (m, y) = date::resolve_month_arg(month.as_ref(), today)?;

        let state = {
            let mut store = SqliteStore::new(&mut pool, schedule.id);
            MonthPlanner::open_at(&mut store, today, m, y)?.state
        };

        header(&schedule.name);

        let next = SlotLogic::next_watering(&slots)
            .map(|s| s.time.as_str())
            .unwrap_or("--");
        println!("Scheduled days: {}", state.selected_days.len());
        println!("Next watering:  {}", next);
        println!();

        print!("{}", grid::render(&state, today)?);
        println!();

        print_slots(&slots, &cfg.default_slot_time);
        println!();

        println!("{} days scheduled this month", state.selected_days.len());
        if SlotLogic::ready(state.selected_days.len(), &slots) {
            info("Schedule is active");
        } else {
            warning("Select at least one day and enable a watering time to activate the schedule");
        }
    }
    Ok(())
}

fn print_slots(slots: &[ScheduleSlot], default_slot_time: &str) {
    if slots.is_empty() {
        let (clock, period) = default_slot_time.split_once(' ').unwrap_or(("08:00", "AM"));
        println!(
            "No watering times configured (add one with: irrical slot --add {clock} --period {period})"
        );
        return;
    }

    println!("ID    TIME      STATUS");
    for s in slots {
        println!("{:<5} {:<9} {}", s.id, s.time, s.status_str());
    }
}
