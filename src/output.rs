/// Where the machine writes its outcome and warning lines. The machine
/// decides content and order, the sink decides the medium.
pub trait OutputSink {
    fn write_line(&mut self, line: &str);
}

/// Writes each line to standard output.
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }
}
