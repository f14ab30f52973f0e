//! Screen ownership.
//!
//! The display and the status record live behind one async mutex, which is
//! what serializes hello sequences against the periodic client refresh.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use hellostick_screen::ScreenService;

use crate::infrastructure::drivers::StickDisplay;

pub type Screen = ScreenService<StickDisplay>;
pub type SharedScreen = Mutex<CriticalSectionRawMutex, Screen>;
