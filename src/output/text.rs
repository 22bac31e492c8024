use crate::error::AppResult;

pub fn line(text: &str) -> AppResult<()> {
    println!("{text}");
    Ok(())
}
