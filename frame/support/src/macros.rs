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

/// Return early with the given error.
#[macro_export]
macro_rules! fail {
	( $y:expr ) => {{
		return Err($y.into());
	}};
}

/// Return early with the given error if the condition does not hold.
#[macro_export]
macro_rules! ensure {
	( $x:expr, $y:expr $(,)? ) => {{
		if !$x {
			$crate::fail!($y);
		}
	}};
}

/// Declare the location of a storage item.
///
/// ```ignore
/// storage_prefix!(pub AccountPrefix, "System", "Account");
/// ```
#[macro_export]
macro_rules! storage_prefix {
	($vis:vis $name:ident, $pallet:expr, $storage:expr) => {
		$vis struct $name;
		impl $crate::storage::StorageInstance for $name {
			const PALLET: &'static str = $pallet;
			const STORAGE: &'static str = $storage;
		}
	};
}

/// Build the outer event enum of a runtime, one variant per module, tagged by module index.
#[macro_export]
macro_rules! impl_outer_event {
	(
		$(#[$attr:meta])*
		pub enum $name:ident {
			$( $index:tt => $module:ident($event:ty), )*
		}
	) => {
		$(#[$attr])*
		#[derive(
			Clone,
			PartialEq,
			Eq,
			$crate::codec::Encode,
			$crate::codec::Decode,
			$crate::scale_info::TypeInfo,
			$crate::sp_runtime::RuntimeDebug,
		)]
		#[codec(crate = $crate::codec)]
		#[scale_info(crate = $crate::scale_info)]
		pub enum $name {
			$(
				#[codec(index = $index)]
				$module($event),
			)*
		}

		$(
			impl From<$event> for $name {
				fn from(e: $event) -> Self {
					$name::$module(e)
				}
			}

			impl TryFrom<$name> for $event {
				type Error = ();

				#[allow(unreachable_patterns)]
				fn try_from(e: $name) -> Result<Self, ()> {
					match e {
						$name::$module(e) => Ok(e),
						_ => Err(()),
					}
				}
			}
		)*
	};
}

/// Create new implementations of the `Get` trait.
///
/// `const` parameters get a `const fn get()`, the others a plain `fn get()` evaluated on every
/// call. `static` parameters live in a thread local and can be changed with `set`, they are only
/// available with `std`.
///
/// ```ignore
/// parameter_types! {
/// 	pub const ExistentialDeposit: Balance = 1;
/// 	pub BlockWeights: limits::BlockWeights = limits::BlockWeights::simple_max(MAX);
/// }
/// ```
#[macro_export]
macro_rules! parameter_types {
	(
		$(#[$attr:meta])*
		$vis:vis const $name:ident: $type:ty = $value:expr;
		$($rest:tt)*
	) => {
		$(#[$attr])*
		$vis struct $name;
		impl $name {
			/// Returns the value of this parameter type.
			pub const fn get() -> $type {
				$value
			}
		}
		impl<I: From<$type>> $crate::sp_runtime::traits::Get<I> for $name {
			fn get() -> I {
				I::from(Self::get())
			}
		}

		$crate::parameter_types!($($rest)*);
	};
	(
		$(#[$attr:meta])*
		$vis:vis static $name:ident: $type:ty = $value:expr;
		$($rest:tt)*
	) => {
		$(#[$attr])*
		$vis struct $name;
		impl $name {
			fn with<R>(f: impl FnOnce(&mut $type) -> R) -> R {
				std::thread_local! {
					static VALUE: core::cell::RefCell<$type> = core::cell::RefCell::new($value);
				}

				VALUE.with(|v| f(&mut v.borrow_mut()))
			}

			/// Returns the value of this parameter type.
			pub fn get() -> $type {
				Self::with(|v| v.clone())
			}

			/// Set the value of this parameter type for the current thread.
			pub fn set(value: $type) {
				Self::with(|v| *v = value);
			}
		}
		impl<I: From<$type>> $crate::sp_runtime::traits::Get<I> for $name {
			fn get() -> I {
				I::from(Self::get())
			}
		}

		$crate::parameter_types!($($rest)*);
	};
	(
		$(#[$attr:meta])*
		$vis:vis $name:ident: $type:ty = $value:expr;
		$($rest:tt)*
	) => {
		$(#[$attr])*
		$vis struct $name;
		impl $name {
			/// Returns the value of this parameter type.
			pub fn get() -> $type {
				$value
			}
		}
		impl<I: From<$type>> $crate::sp_runtime::traits::Get<I> for $name {
			fn get() -> I {
				I::from(Self::get())
			}
		}

		$crate::parameter_types!($($rest)*);
	};
	() => {};
}
