use crate::OpaqueParams;
use serde::Serialize;

/// Identifiers attached to every outgoing request.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RequestTransaction {
    #[serde(rename = "ClientID")]
    pub(crate) client_id: u32,
    #[serde(rename = "ClientTransactionID")]
    pub(crate) client_transaction_id: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct RequestWithTransaction<'params> {
    #[serde(flatten)]
    pub(crate) transaction: RequestTransaction,
    #[serde(flatten)]
    pub(crate) params: &'params OpaqueParams,
}

/// Transaction counter of one client.
///
/// GET requests reuse the current value, PUT requests bump it first.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TransactionCounter {
    client_id: u32,
    current: u32,
}

impl TransactionCounter {
    pub(crate) const fn new(client_id: u32, seed: u32) -> Self {
        Self {
            client_id,
            current: seed,
        }
    }

    pub(crate) const fn current(&self) -> u32 {
        self.current
    }

    pub(crate) const fn reseed(&mut self, seed: u32) {
        self.current = seed;
    }

    /// Transaction for a read-only query; the counter is left as is.
    pub(crate) const fn for_query(&self) -> RequestTransaction {
        RequestTransaction {
            client_id: self.client_id,
            client_transaction_id: self.current,
        }
    }

    /// Transaction for a command; increments the counter and returns the new value.
    pub(crate) const fn for_command(&mut self) -> RequestTransaction {
        self.current = self.current.wrapping_add(1);
        self.for_query()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opaque_params;

    #[test]
    fn commands_increment_before_sending() {
        let mut counter = TransactionCounter::new(65535, 10);

        assert_eq!(counter.for_query().client_transaction_id, 10);
        assert_eq!(counter.for_command().client_transaction_id, 11);
        assert_eq!(counter.for_query().client_transaction_id, 11);
        assert_eq!(counter.for_command().client_transaction_id, 12);
        assert_eq!(counter.current(), 12);
        assert_eq!(counter.for_query().client_id, 65535);
    }

    #[test]
    fn counter_wraps_instead_of_overflowing() {
        let mut counter = TransactionCounter::new(1, u32::MAX);
        assert_eq!(counter.for_command().client_transaction_id, 0);
    }

    #[test]
    fn serializes_ids_before_params() -> eyre::Result<()> {
        let params = opaque_params! { Connected: true };
        let request = RequestWithTransaction {
            transaction: RequestTransaction {
                client_id: 7,
                client_transaction_id: 3,
            },
            params: &params,
        };

        assert_eq!(
            serde_json::to_string(&request)?,
            r#"{"ClientID":7,"ClientTransactionID":3,"Connected":"true"}"#
        );
        Ok(())
    }
}
