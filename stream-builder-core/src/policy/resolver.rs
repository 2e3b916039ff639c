use crate::models::config::{BuilderConfig, DEFAULT_MMAP_EXCLUSIVE_POLICY, DEFAULT_MMAP_POLICY};
use crate::models::policy::{Disposition, EffectivePolicy, PolicyAxis, PolicyInfo};
use crate::traits::policy_provider::PolicyInfoProvider;

/// Reduce per-device policy entries to one disposition.
///
/// Empty → `Auto`; all entries agree → that disposition; mixed → `Auto`.
pub fn reduce(infos: &[PolicyInfo]) -> Disposition {
    let Some((first, rest)) = infos.split_first() else {
        return Disposition::Auto;
    };
    if rest.iter().any(|info| info.disposition != first.disposition) {
        return Disposition::Auto;
    }
    first.disposition
}

/// Hard-coded fallback for `axis`.
pub fn default_for(axis: PolicyAxis) -> Disposition {
    match axis {
        PolicyAxis::Default => DEFAULT_MMAP_POLICY,
        PolicyAxis::Exclusive => DEFAULT_MMAP_EXCLUSIVE_POLICY,
    }
}

/// Resolve one policy axis.
///
/// First specified value wins: `explicit_override`, then the reduction of the
/// provider's entries, then the hard default. The provider is only queried
/// when the override is unspecified; a query failure counts as unspecified.
pub fn resolve_policy(
    explicit_override: Disposition,
    provider: &dyn PolicyInfoProvider,
    axis: PolicyAxis,
) -> Disposition {
    if explicit_override.is_specified() {
        return explicit_override;
    }

    let from_system = match provider.query(axis) {
        Ok(infos) => reduce(&infos),
        Err(e) => {
            log::warn!("policy info for {:?} unavailable: {}", axis, e);
            Disposition::Unspecified
        }
    };
    if from_system.is_specified() {
        return from_system;
    }

    default_for(axis)
}

/// Resolve both axes using the overrides in `config`.
pub fn resolve_policies(config: &BuilderConfig, provider: &dyn PolicyInfoProvider) -> EffectivePolicy {
    let general = resolve_policy(config.policy_override(PolicyAxis::Default), provider, PolicyAxis::Default);
    let exclusive = resolve_policy(
        config.policy_override(PolicyAxis::Exclusive),
        provider,
        PolicyAxis::Exclusive,
    );
    log::debug!("resolved mmap policy = {:?}, exclusive = {:?}", general, exclusive);
    EffectivePolicy { general, exclusive }
}
