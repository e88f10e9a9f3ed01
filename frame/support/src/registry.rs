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

//! Decoding of encoded calls by `(module_index, function_index)`.
//!
//! Each module owns a closed `Call` enum. The registry only knows how to turn the bytes of a
//! registered call into the runtime's outer call type `C`, so new modules plug in without touching
//! the decoding logic.

// --- crates.io ---
use codec::Decode;
// --- paritytech ---
use sp_runtime::RuntimeDebug;
use sp_std::{collections::btree_map::BTreeMap, prelude::*};
// --- darwinia-network ---
use crate::dispatch::{GetCallIndex, GetCallName};

/// Why an encoded call could not be decoded.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum CallDecodeError {
	/// The input is too short to contain the module and the function index.
	MissingIndices,
	/// No module is registered under this index.
	UnknownModule(u8),
	/// The module does not declare this function.
	UnknownFunction { module: u8, function: u8 },
	/// The arguments do not decode.
	InvalidArguments { module: u8, function: u8 },
	/// The call decoded but some input is left.
	TrailingBytes,
}

/// A registered call.
pub struct CallEntry<C> {
	pub module_name: &'static str,
	pub function_name: &'static str,
	decode: fn(&mut &[u8]) -> Result<C, codec::Error>,
}
impl<C> Clone for CallEntry<C> {
	fn clone(&self) -> Self {
		Self {
			module_name: self.module_name,
			function_name: self.function_name,
			decode: self.decode,
		}
	}
}

fn decode_as<M, C>(input: &mut &[u8]) -> Result<C, codec::Error>
where
	M: Decode + Into<C>,
{
	M::decode(input).map(Into::into)
}

/// Maps `(module_index, function_index)` to a decoder producing the outer call `C`.
pub struct CallRegistry<C> {
	modules: BTreeMap<u8, &'static str>,
	calls: BTreeMap<(u8, u8), CallEntry<C>>,
}
impl<C> Default for CallRegistry<C> {
	fn default() -> Self {
		Self { modules: BTreeMap::new(), calls: BTreeMap::new() }
	}
}
impl<C> CallRegistry<C> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register every function of the module call enum `M` under `module_index`.
	///
	/// Registering a second module under the same index replaces the first one.
	pub fn register<M>(&mut self, module_index: u8, module_name: &'static str) -> &mut Self
	where
		M: Decode + GetCallIndex + GetCallName + Into<C>,
	{
		self.calls.retain(|(m, _), _| *m != module_index);
		self.modules.insert(module_index, module_name);

		for (function_index, function_name) in
			M::get_call_indices().iter().zip(M::get_call_names().iter())
		{
			self.calls.insert(
				(module_index, *function_index),
				CallEntry { module_name, function_name: *function_name, decode: decode_as::<M, C> },
			);
		}

		self
	}

	/// The `(module_name, function_name)` of a registered call.
	pub fn lookup(&self, module: u8, function: u8) -> Option<(&'static str, &'static str)> {
		self.calls.get(&(module, function)).map(|e| (e.module_name, e.function_name))
	}

	pub fn modules(&self) -> impl Iterator<Item = (u8, &'static str)> + '_ {
		self.modules.iter().map(|(i, n)| (*i, *n))
	}

	/// Decode one call from the front of `input`, advancing it past the consumed bytes.
	pub fn decode(&self, input: &mut &[u8]) -> Result<C, CallDecodeError> {
		if input.len() < 2 {
			return Err(CallDecodeError::MissingIndices);
		}

		let (module, function) = (input[0], input[1]);

		if !self.modules.contains_key(&module) {
			return Err(CallDecodeError::UnknownModule(module));
		}

		let entry = self
			.calls
			.get(&(module, function))
			.ok_or(CallDecodeError::UnknownFunction { module, function })?;
		let full: &[u8] = *input;
		// The module call enum starts at its own function index.
		let mut rest = &full[1..];
		let call = (entry.decode)(&mut rest).map_err(|e| {
			log::debug!(
				target: "runtime::executive",
				"Invalid arguments for {}::{}: {:?}",
				entry.module_name,
				entry.function_name,
				e,
			);

			CallDecodeError::InvalidArguments { module, function }
		})?;

		*input = rest;

		Ok(call)
	}

	/// Decode exactly one call spanning the whole `input`.
	pub fn decode_all(&self, mut input: &[u8]) -> Result<C, CallDecodeError> {
		let call = self.decode(&mut input)?;

		if input.is_empty() {
			Ok(call)
		} else {
			Err(CallDecodeError::TrailingBytes)
		}
	}
}
