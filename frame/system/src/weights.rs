// This file is part of Darwinia.
//
// Copyright (C) 2018-2022 Darwinia Network
// SPDX-License-Identifier: GPL-3.0
//
// Darwinia is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Darwinia is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Darwinia. If not, see <https://www.gnu.org/licenses/>.

//! Weights for darwinia_system.

#![allow(unused_parens)]
#![allow(unused_imports)]

// --- core ---
use core::marker::PhantomData;
// --- darwinia-network ---
use darwinia_support::weights::Weight;

/// Weight functions needed for darwinia_system.
pub trait WeightInfo {
	fn remark(b: u32) -> Weight;
	fn remark_with_event(b: u32) -> Weight;
}

/// Weights for darwinia_system using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: crate::Config> WeightInfo for SubstrateWeight<T> {
	/// The range of component `b` is `[0, 3932160]`.
	fn remark(b: u32) -> Weight {
		// Minimum execution time: 2_091 nanoseconds.
		Weight::from_parts(2_091_000, 0)
			.saturating_add(Weight::from_parts(362, 0).saturating_mul(b as u64))
	}

	/// The range of component `b` is `[0, 3932160]`.
	fn remark_with_event(b: u32) -> Weight {
		// Minimum execution time: 7_808 nanoseconds.
		Weight::from_parts(7_808_000, 0)
			.saturating_add(Weight::from_parts(1_735, 0).saturating_mul(b as u64))
	}
}

// For backwards compatibility and tests
impl WeightInfo for () {
	fn remark(b: u32) -> Weight {
		Weight::from_parts(2_091_000, 0)
			.saturating_add(Weight::from_parts(362, 0).saturating_mul(b as u64))
	}

	fn remark_with_event(b: u32) -> Weight {
		Weight::from_parts(7_808_000, 0)
			.saturating_add(Weight::from_parts(1_735, 0).saturating_mul(b as u64))
	}
}
