// ============================================================================
// Customer Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("Customer id cannot be empty")]
    EmptyId,

    #[error("Customer name cannot be empty")]
    EmptyName,

    #[error("An address is required to activate a customer")]
    AddressRequired,

    #[error("Street cannot be empty")]
    EmptyStreet,

    #[error("Zip cannot be empty")]
    EmptyZip,

    #[error("City cannot be empty")]
    EmptyCity,
}
