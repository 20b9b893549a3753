use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::insert_punch;
use crate::errors::{AppError, AppResult};
use crate::models::punch::PunchEvent;
use crate::models::punch_kind::PunchKind;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::parse_required_time;

/// Record one punch event. The punches table is append-only; the engine
/// sorts and reduces them later, so out-of-order entry is fine.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        worker,
        date: date_str,
        kind,
        time,
    } = cmd
    {
        let d = date::parse_required_date(date_str)?;
        let t = parse_required_time(time)?;
        let k = PunchKind::pk_from_str(kind)
            .ok_or_else(|| AppError::InvalidPunchKind(kind.to_string()))?;

        let pool = DbPool::new(&cfg.database)?;
        let punch = PunchEvent::new(0, worker, d, t, k);
        insert_punch(&pool.conn, &punch)?;

        success(format!(
            "Recorded {} for {} at {} {}",
            k.to_db_str(),
            worker,
            date_str,
            time
        ));
    }
    Ok(())
}
