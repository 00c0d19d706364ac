//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments and the response status is checked.

mod game_path;
mod photo;
mod pilot;

use passport_test_utils::prelude::*;

use crate::util::TestSetupExt;
