
#[cfg(test)]
mod capture;
