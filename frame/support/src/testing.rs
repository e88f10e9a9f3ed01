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

//! Assertions for module tests.

/// Assert an expression returns `Ok`, optionally equal to the given value.
#[macro_export]
macro_rules! assert_ok {
	( $x:expr $(,)? ) => {
		let is = $x;
		match is {
			Ok(_) => (),
			_ => assert!(false, "Expected Ok(_). Got {:#?}", is),
		}
	};
	( $x:expr, $y:expr $(,)? ) => {
		assert_eq!($x, Ok($y));
	};
}

/// Assert an expression returns the given error.
#[macro_export]
macro_rules! assert_err {
	( $x:expr , $y:expr $(,)? ) => {
		assert_eq!($x, Err($y.into()));
	};
}

/// Assert a dispatch returns the given error, ignoring the post dispatch info.
#[macro_export]
macro_rules! assert_err_ignore_postinfo {
	( $x:expr , $y:expr $(,)? ) => {
		$crate::assert_err!($x.map(|_| ()).map_err(|e| e.error), $y);
	};
}

/// Assert an expression returns the given error and leaves the storage root of `$ext` untouched.
#[macro_export]
macro_rules! assert_noop {
	( $ext:expr, $x:expr, $y:expr $(,)? ) => {
		let h = $ext.storage_root();
		$crate::assert_err!($x, $y);
		assert_eq!(h, $ext.storage_root(), "storage has been mutated");
	};
}

/// Assert an expression leaves the storage root of `$ext` untouched.
#[macro_export]
macro_rules! assert_storage_noop {
	( $ext:expr, $x:expr $(,)? ) => {
		let h = $ext.storage_root();
		$x;
		assert_eq!(h, $ext.storage_root(), "storage has been mutated");
	};
}
