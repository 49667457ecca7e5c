use crate::db::queries::DayRecord;
use csv::Writer;

/// Write the scheduled-day rows as CSV.
pub fn write_csv(path: &str, days: &[DayRecord]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["date", "year", "month", "day"])?;

    for d in days {
        wtr.write_record(&[
            d.scheduled_date.clone(),
            d.year.to_string(),
            d.month.to_string(),
            d.day.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
