//! # Integration Test Flows
//!
//! End-to-end flows through the public service APIs:
//!
//! 1. **Digest service**: configured algorithms produce the same bytes as a
//!    direct `sha2` computation over the concatenated handshake inputs
//! 2. **Failure propagation**: stage failures surface as the matching status
//!    through type-erased stage references
//! 3. **Copy then digest**: a bounded copy of a received payload feeds the
//!    digest, and an over-long claim stops the flow before hashing

#[cfg(test)]
mod tests {
    use hg_01_handshake_digest::{
        erase, DigestAlgorithm, HandshakeDigestApi, HandshakeDigestConfig, HandshakeDigestError,
        HandshakeDigestService, HandshakeInputs, HandshakeStatus, Sha256Stages, Stage, StageError,
        StageTable,
    };
    use hg_02_bounded_copy::{BoundedCopier, CopyConfig, CopyError, SizeWidthKind};
    use sha2::{Digest, Sha256, Sha384};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const CLIENT: &[u8] = &[0x11; 32];
    const SERVER: &[u8] = &[0x22; 32];
    const PARAMS: &[u8] = b"\x03\x00\x17\x41ecdhe-params";

    fn inputs() -> HandshakeInputs<'static> {
        HandshakeInputs::new(CLIENT, SERVER, PARAMS)
    }

    fn sha256_service() -> HandshakeDigestService<Box<hg_01_handshake_digest::DynDigestStages>> {
        crate::init_test_logging();
        HandshakeDigestService::from_config(HandshakeDigestConfig::default())
    }

    // =============================================================================
    // DIGEST SERVICE
    // =============================================================================

    #[test]
    fn test_sha256_service_matches_direct_hash() {
        let service = sha256_service();
        let digest = service.compute(inputs()).unwrap();

        let expected = Sha256::new()
            .chain_update(CLIENT)
            .chain_update(SERVER)
            .chain_update(PARAMS)
            .finalize();
        assert_eq!(hex::encode(&digest), hex::encode(expected));
        assert_eq!(service.status(inputs()), HandshakeStatus::Success);
    }

    #[test]
    fn test_sha384_service_matches_direct_hash() {
        crate::init_test_logging();
        let config = HandshakeDigestConfig {
            algorithm: "SHA-384".parse().unwrap(),
            log_digests: true,
        };
        let service = HandshakeDigestService::from_config(config);

        let mut concatenated = Vec::new();
        concatenated.extend_from_slice(CLIENT);
        concatenated.extend_from_slice(SERVER);
        concatenated.extend_from_slice(PARAMS);

        assert_eq!(
            service.compute(inputs()).unwrap(),
            Sha384::digest(&concatenated).to_vec()
        );
    }

    #[test]
    fn test_absent_inputs_hash_as_empty() {
        let service = sha256_service();
        let absent = HandshakeInputs {
            client: None,
            server: None,
            params: None,
        };
        let empty = HandshakeInputs::new(b"", b"", b"");

        assert_eq!(
            service.compute(absent).unwrap(),
            service.compute(empty).unwrap()
        );
    }

    #[test]
    fn test_services_are_independent() {
        let first = sha256_service();
        let second = HandshakeDigestService::new(
            Sha256Stages::new(),
            HandshakeDigestConfig::default(),
        );
        assert_eq!(
            first.compute(inputs()).unwrap(),
            second.compute(inputs()).unwrap()
        );
    }

    // =============================================================================
    // FAILURE PROPAGATION
    // =============================================================================

    fn refuse_params(_ctx: &mut (), data: &[u8]) -> Result<(), StageError> {
        if data.starts_with(b"\x03") {
            Err(StageError::new(4))
        } else {
            Ok(())
        }
    }

    #[test]
    fn test_erased_stage_table_failure_reaches_api() {
        crate::init_test_logging();
        let table = StageTable::null().with_update(refuse_params);
        let service = HandshakeDigestService::new(erase(table), HandshakeDigestConfig::for_testing());

        assert_eq!(service.status(inputs()), HandshakeStatus::ParamsUpdateFailure);
        match service.compute(inputs()) {
            Err(HandshakeDigestError::StageFailed(failure)) => {
                assert_eq!(failure.stage, Stage::UpdateParams);
                assert_eq!(failure.error.code, 4);
            }
            other => panic!("expected params failure, got {other:?}"),
        }
    }

    #[test]
    fn test_output_too_short_is_final_failure() {
        let stages = Sha256Stages::new();
        let mut ctx = hg_01_handshake_digest::DigestStages::new_context(&stages);
        let mut out = [0u8; 16];

        let status = hg_01_handshake_digest::validate(
            &stages,
            &mut ctx,
            Some(CLIENT),
            Some(SERVER),
            Some(PARAMS),
            &mut out,
        );
        assert_eq!(status, HandshakeStatus::FinalFailure);
        assert_eq!(HandshakeStatus::from_code(status.code()), Some(status));
    }

    #[test]
    fn test_every_algorithm_reports_success() {
        for algorithm in [
            DigestAlgorithm::Null,
            DigestAlgorithm::Sha256,
            DigestAlgorithm::Sha384,
            DigestAlgorithm::Sha3_256,
        ] {
            let service = HandshakeDigestService::from_config(HandshakeDigestConfig {
                algorithm,
                log_digests: false,
            });
            let digest = service.compute(inputs()).unwrap();
            assert_eq!(digest.len(), service.digest_size(), "{algorithm}");
        }
    }

    // =============================================================================
    // COPY THEN DIGEST
    // =============================================================================

    /// Copy the claimed number of payload bytes, then bind them into the
    /// handshake digest as the params buffer.
    fn copy_and_digest(
        copier: &BoundedCopier,
        service: &impl HandshakeDigestApi,
        payload: &[u8],
        claimed: usize,
    ) -> Result<Vec<u8>, CopyError> {
        let params = copier.copy(Some(payload), claimed)?;
        Ok(service
            .compute(HandshakeInputs::new(CLIENT, SERVER, params.as_bytes()))
            .unwrap_or_default())
    }

    #[test]
    fn test_copy_then_digest_honest_payload() {
        let service = sha256_service();
        let copier = BoundedCopier::default();

        let digest = copy_and_digest(&copier, &service, PARAMS, PARAMS.len()).unwrap();
        assert_eq!(digest, service.compute(inputs()).unwrap());
    }

    #[test]
    fn test_copy_then_digest_truncated_claim() {
        let service = sha256_service();
        let copier = BoundedCopier::default();

        let digest = copy_and_digest(&copier, &service, PARAMS, 4).unwrap();
        let expected = service
            .compute(HandshakeInputs::new(CLIENT, SERVER, &PARAMS[..4]))
            .unwrap();
        assert_eq!(digest, expected);
    }

    #[test]
    fn test_copy_then_digest_overlong_claim_stops_flow() {
        let service = sha256_service();
        let copier = BoundedCopier::new(CopyConfig {
            width: SizeWidthKind::U8,
            nul_terminate: false,
        });

        assert!(matches!(
            copy_and_digest(&copier, &service, PARAMS, 300),
            Err(CopyError::SizeOverflow { .. })
        ));
        assert!(matches!(
            copy_and_digest(&copier, &service, PARAMS, 200),
            Err(CopyError::SourceTooShort { .. })
        ));
    }
}
