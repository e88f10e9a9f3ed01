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

// --- core ---
use core::{fmt::Debug, marker::PhantomData};
// --- crates.io ---
use codec::{Codec, DecodeAll};
use scale_info::StaticTypeInfo;
// --- paritytech ---
use sp_runtime::{
	traits::{LookupError, StaticLookup},
	MultiAddress,
};

/// A lookup implementation returning the `AccountId` from a `MultiAddress`.
///
/// `Id` is taken as is and `Address32` is accepted when it is exactly the encoding of an
/// `AccountId`. There are no indices or raw addresses on this chain.
pub struct AccountIdLookup<AccountId, AccountIndex>(PhantomData<(AccountId, AccountIndex)>);
impl<AccountId, AccountIndex> StaticLookup for AccountIdLookup<AccountId, AccountIndex>
where
	AccountId: Codec + Clone + PartialEq + Debug,
	AccountIndex: Codec + Clone + PartialEq + Debug,
	MultiAddress<AccountId, AccountIndex>: Codec + StaticTypeInfo,
{
	type Source = MultiAddress<AccountId, AccountIndex>;
	type Target = AccountId;

	fn lookup(x: Self::Source) -> Result<Self::Target, LookupError> {
		match x {
			MultiAddress::Id(i) => Ok(i),
			MultiAddress::Address32(raw) => AccountId::decode_all(&mut &raw[..]).map_err(|_| {
				log::debug!(target: "runtime::system", "Address32 is not an account id");

				LookupError
			}),
			_ => Err(LookupError),
		}
	}

	fn unlookup(x: Self::Target) -> Self::Source {
		MultiAddress::Id(x)
	}
}
