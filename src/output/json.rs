use serde::Serialize;

use crate::error::AppResult;

pub fn pretty<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
