#[cfg(test)]
pub mod memory;
