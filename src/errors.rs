#[derive(Debug, PartialEq, Eq)]
pub enum VendingMachineError {
    FileReaderError,
    MalformedConfiguration,
    InvalidQuantity,
}
