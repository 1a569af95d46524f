//! Currency domain model.

use crate::error::DomainError;
use crate::mapping::CurrencyMapper;

/// A currency in the catalog.
///
/// Immutable once built. Equality is structural over all three fields;
/// catalog-wide uniqueness of `code` is a service concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency {
    code: String,
    full_name: String,
    sign: String,
}

impl Currency {
    /// Creates a new currency.
    ///
    /// # Validation
    /// - No field may be blank
    pub fn create(
        code: impl Into<String>,
        full_name: impl Into<String>,
        sign: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let currency = Self::from_parts(code.into(), full_name.into(), sign.into());

        for (field, value) in [
            ("code", &currency.code),
            ("full_name", &currency.full_name),
            ("sign", &currency.sign),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::Validation(format!(
                    "Currency {} cannot be empty",
                    field
                )));
            }
        }

        Ok(currency)
    }

    /// Rebuilds a currency from stored fields without validation.
    pub fn from_parts(code: String, full_name: String, sign: String) -> Self {
        Self {
            code,
            full_name,
            sign,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn sign(&self) -> &str {
        &self.sign
    }

    /// Projects this currency through `mapper`.
    pub fn map<T, M>(&self, mapper: &M) -> T
    where
        M: CurrencyMapper<T> + ?Sized,
    {
        mapper.map(&self.code, &self.full_name, &self.sign)
    }
}
