/// Turns a header row and data rows into printable text.
pub trait TableRenderer: Send + Sync {
    fn render(&self, headers: &[&str], rows: &[Vec<String>]) -> String;
}
