use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::slots::SlotLogic;
use crate::db::log::irlog;
use crate::db::pool::DbPool;
use crate::db::queries::fetch_or_create_schedule;
use crate::errors::AppResult;
use crate::models::slot::ScheduleSlot;
use crate::ui::messages::success;

/// Manage watering time slots: add, enable/disable, delete, list.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Slot {
        add,
        period,
        enable,
        disable,
        del,
        list,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let schedule = fetch_or_create_schedule(&pool.conn, &cfg.schedule_name)?;

        if let Some(clock) = add {
            let slot = SlotLogic::add(&mut pool, schedule.id, clock, period)?;
            irlog(&pool.conn, "slot_added", &slot.time, "Watering time added")?;
            success(format!("Added watering time {} (id {})", slot.time, slot.id));
        }

        if let Some(id) = enable {
            SlotLogic::set_enabled(&mut pool, *id, true)?;
            irlog(&pool.conn, "slot_enabled", &id.to_string(), "Watering time enabled")?;
            success(format!("Slot {id} enabled"));
        }

        if let Some(id) = disable {
            SlotLogic::set_enabled(&mut pool, *id, false)?;
            irlog(&pool.conn, "slot_disabled", &id.to_string(), "Watering time disabled")?;
            success(format!("Slot {id} disabled"));
        }

        if let Some(id) = del {
            SlotLogic::delete(&mut pool, *id)?;
            irlog(&pool.conn, "slot_deleted", &id.to_string(), "Watering time deleted")?;
            success(format!("Slot {id} deleted"));
        }

        if *list || (add.is_none() && enable.is_none() && disable.is_none() && del.is_none()) {
            let slots = SlotLogic::list(&mut pool, schedule.id)?;
            print_slots(&slots);
        }
    }
    Ok(())
}

fn print_slots(slots: &[ScheduleSlot]) {
    if slots.is_empty() {
        println!("No watering times configured");
        return;
    }

    println!("ID    TIME      STATUS");
    for s in slots {
        println!("{:<5} {:<9} {}", s.id, s.time, s.status_str());
    }
}
