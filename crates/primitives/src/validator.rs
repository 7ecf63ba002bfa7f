//! Genesis validator records and withdrawal credentials.

use crate::{
    constants::{
        BLS_WITHDRAWAL_PREFIX, COMPOUNDING_WITHDRAWAL_PREFIX, EFFECTIVE_BALANCE_INCREMENT,
        ETH1_ADDRESS_WITHDRAWAL_PREFIX, FAR_FUTURE_EPOCH, MAX_EFFECTIVE_BALANCE,
        MAX_EFFECTIVE_BALANCE_ELECTRA,
    },
    BlsPublicKey, ForkName, Validator,
};
use alloy_primitives::{Address, B256};

/// A 32-byte commitment to a validator's withdrawal authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WithdrawalCredentials(pub B256);

impl WithdrawalCredentials {
    /// BLS-hash credentials from the SHA-256 digest of the withdrawal pubkey.
    pub fn bls(withdrawal_pubkey_hash: B256) -> Self {
        let mut credentials = withdrawal_pubkey_hash;
        credentials[0] = BLS_WITHDRAWAL_PREFIX;
        Self(credentials)
    }

    /// Eth1-address credentials paying out to `address`.
    pub fn eth1(address: Address) -> Self {
        let mut credentials = B256::ZERO;
        credentials[0] = ETH1_ADDRESS_WITHDRAWAL_PREFIX;
        credentials[12..].copy_from_slice(address.as_slice());
        Self(credentials)
    }

    /// The scheme tag.
    pub const fn prefix(&self) -> u8 {
        self.0 .0[0]
    }

    /// Returns `true` for a BLS-hash credential, or an Eth1-address credential with zeroed
    /// padding.
    pub fn is_well_formed(&self) -> bool {
        match self.prefix() {
            BLS_WITHDRAWAL_PREFIX => true,
            ETH1_ADDRESS_WITHDRAWAL_PREFIX => self.0[1..12].iter().all(|b| *b == 0),
            _ => false,
        }
    }
}

impl From<B256> for WithdrawalCredentials {
    fn from(credentials: B256) -> Self {
        Self(credentials)
    }
}

impl From<WithdrawalCredentials> for B256 {
    fn from(credentials: WithdrawalCredentials) -> Self {
        credentials.0
    }
}

/// One validator of the genesis set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ValidatorRecord {
    /// Compressed signing pubkey.
    pub pubkey: BlsPublicKey,
    /// Withdrawal credentials.
    pub withdrawal_credentials: B256,
    /// Initial balance, in Gwei.
    pub balance: u64,
}

impl ValidatorRecord {
    /// Creates a record with the default genesis balance of [MAX_EFFECTIVE_BALANCE].
    pub const fn new(pubkey: BlsPublicKey, withdrawal_credentials: B256) -> Self {
        Self { pubkey, withdrawal_credentials, balance: MAX_EFFECTIVE_BALANCE }
    }

    /// Returns `true` if the credentials mark a compounding validator.
    pub const fn has_compounding_credentials(&self) -> bool {
        self.withdrawal_credentials.0[0] == COMPOUNDING_WITHDRAWAL_PREFIX
    }

    /// The effective balance cap of this validator at `fork`.
    pub const fn max_effective_balance(&self, fork: ForkName) -> u64 {
        match fork {
            ForkName::Electra if self.has_compounding_credentials() => {
                MAX_EFFECTIVE_BALANCE_ELECTRA
            }
            _ => MAX_EFFECTIVE_BALANCE,
        }
    }

    /// The balance rounded down to [EFFECTIVE_BALANCE_INCREMENT] and capped at
    /// [Self::max_effective_balance].
    pub const fn effective_balance(&self, fork: ForkName) -> u64 {
        let rounded = self.balance - self.balance % EFFECTIVE_BALANCE_INCREMENT;
        let cap = self.max_effective_balance(fork);
        if rounded < cap {
            rounded
        } else {
            cap
        }
    }

    /// The registry entry of this record at genesis, with every epoch unset.
    pub const fn to_validator(&self, fork: ForkName) -> Validator {
        Validator {
            pubkey: self.pubkey,
            withdrawal_credentials: self.withdrawal_credentials,
            effective_balance: self.effective_balance(fork),
            slashed: false,
            activation_eligibility_epoch: FAR_FUTURE_EPOCH,
            activation_epoch: FAR_FUTURE_EPOCH,
            exit_epoch: FAR_FUTURE_EPOCH,
            withdrawable_epoch: FAR_FUTURE_EPOCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use proptest::prelude::*;

    #[test]
    fn test_eth1_credentials_layout() {
        let addr = address!("8943545177806ed17b9f23f0a21ee5948ecaa776");
        let credentials = WithdrawalCredentials::eth1(addr);
        assert_eq!(credentials.prefix(), ETH1_ADDRESS_WITHDRAWAL_PREFIX);
        assert!(credentials.0[1..12].iter().all(|b| *b == 0));
        assert_eq!(&credentials.0[12..], addr.as_slice());
        assert!(credentials.is_well_formed());
    }

    #[test]
    fn test_bls_credentials_layout() {
        let digest = B256::repeat_byte(0xff);
        let credentials = WithdrawalCredentials::bls(digest);
        assert_eq!(credentials.prefix(), BLS_WITHDRAWAL_PREFIX);
        assert_eq!(&credentials.0[1..], &digest[1..]);
        assert!(credentials.is_well_formed());
    }

    #[test]
    fn test_malformed_credentials() {
        let mut padded = WithdrawalCredentials::eth1(Address::repeat_byte(0x11)).0;
        padded[5] = 1;
        assert!(!WithdrawalCredentials(padded).is_well_formed());

        let mut compounding = B256::ZERO;
        compounding[0] = COMPOUNDING_WITHDRAWAL_PREFIX;
        assert!(!WithdrawalCredentials(compounding).is_well_formed());
    }

    #[test]
    fn test_effective_balance_cap() {
        let mut record = ValidatorRecord::new(BlsPublicKey::ZERO, B256::ZERO);
        assert_eq!(record.effective_balance(ForkName::Phase0), MAX_EFFECTIVE_BALANCE);

        record.balance = MAX_EFFECTIVE_BALANCE - 1;
        assert_eq!(
            record.effective_balance(ForkName::Phase0),
            MAX_EFFECTIVE_BALANCE - EFFECTIVE_BALANCE_INCREMENT
        );

        record.balance = 100 * MAX_EFFECTIVE_BALANCE;
        assert_eq!(record.effective_balance(ForkName::Electra), MAX_EFFECTIVE_BALANCE);
        record.withdrawal_credentials.0[0] = COMPOUNDING_WITHDRAWAL_PREFIX;
        assert_eq!(record.effective_balance(ForkName::Deneb), MAX_EFFECTIVE_BALANCE);
        assert_eq!(record.effective_balance(ForkName::Electra), MAX_EFFECTIVE_BALANCE_ELECTRA);
    }

    #[test]
    fn test_to_validator_epochs_unset() {
        let record = ValidatorRecord::new(BlsPublicKey::repeat_byte(1), B256::repeat_byte(2));
        let validator = record.to_validator(ForkName::Altair);
        assert_eq!(validator.pubkey, record.pubkey);
        assert_eq!(validator.activation_epoch, FAR_FUTURE_EPOCH);
        assert_eq!(validator.activation_eligibility_epoch, FAR_FUTURE_EPOCH);
        assert_eq!(validator.exit_epoch, FAR_FUTURE_EPOCH);
        assert_eq!(validator.withdrawable_epoch, FAR_FUTURE_EPOCH);
        assert!(!validator.slashed);
    }

    proptest! {
        #[test]
        fn test_effective_balance_is_rounded_and_capped(balance in any::<u64>()) {
            let record = ValidatorRecord { balance, ..Default::default() };
            let effective = record.effective_balance(ForkName::Capella);
            prop_assert_eq!(effective % EFFECTIVE_BALANCE_INCREMENT, 0);
            prop_assert!(effective <= MAX_EFFECTIVE_BALANCE);
            prop_assert!(effective <= balance);
        }
    }
}
