#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod constants;

mod preset;
pub use preset::{EthSpec, MainnetEthSpec, MinimalEthSpec, Preset};

mod fork;
pub use fork::{ForkCapabilities, ForkName};

mod config;
pub use config::ChainConfig;

mod errors;
pub use errors::{ConfigError, ConfigResult, StateError, StateResult};

mod containers;
pub use containers::{
    Attestation, AttestationData, AttestationElectra, AttesterSlashing, AttesterSlashingElectra,
    BeaconBlockHeader, BlsPublicKey, BlsSignature, BlsToExecutionChange, Checkpoint,
    ConsolidationRequest, Deposit, DepositData, DepositDataList, DepositRequest, Eth1Data,
    ExecutionRequests, Fork, HistoricalSummary, IndexedAttestation, IndexedAttestationElectra,
    PendingAttestation, PendingConsolidation, PendingDeposit, PendingPartialWithdrawal,
    ProposerSlashing, SignedBeaconBlockHeader, SignedBlsToExecutionChange, SignedVoluntaryExit,
    SyncAggregate, SyncCommittee, Validator, VoluntaryExit, WithdrawalRequest,
};

mod execution;
pub use execution::{
    ExecutionPayloadBellatrix, ExecutionPayloadCapella, ExecutionPayloadDeneb,
    ExecutionPayloadHeader, ExecutionPayloadHeaderBellatrix, ExecutionPayloadHeaderCapella,
    ExecutionPayloadHeaderDeneb, Transaction, Transactions, Withdrawal, Withdrawals,
};

mod body;
pub use body::{
    BeaconBlockBodyAltair, BeaconBlockBodyBellatrix, BeaconBlockBodyCapella, BeaconBlockBodyDeneb,
    BeaconBlockBodyElectra, BeaconBlockBodyPhase0,
};

mod state;
pub use state::{
    BeaconState, BeaconStateAltair, BeaconStateBellatrix, BeaconStateCapella, BeaconStateDeneb,
    BeaconStateElectra, BeaconStatePhase0,
};

mod validator;
pub use validator::{ValidatorRecord, WithdrawalCredentials};
