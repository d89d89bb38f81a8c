use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use libpulse_binding::{
    callbacks::ListResult,
    context::{Context, FlagSet as ContextFlags, State as ContextState},
    mainloop::standard::{IterateResult, Mainloop},
    operation::{Operation, State as OperationState},
};
use tracing::{debug, instrument};

use super::{
    AudioControl, AudioError, DeviceIndex, DeviceInfo, Volume,
    conversion::{convert_volume_to_pulse, create_device_info_from_sink},
};

/// Blocking PulseAudio connection
///
/// Holds the mainloop and a connected context for the lifetime of the value.
/// Every request is driven to completion before the call returns. Dropping
/// the session disconnects from the server.
pub struct PulseSession {
    context: Context,
    mainloop: Mainloop,
}

impl PulseSession {
    /// Connect to the default PulseAudio server
    ///
    /// # Errors
    /// Returns error if the mainloop or context cannot be created or the
    /// context never reaches the ready state
    #[instrument]
    pub fn connect(client_name: &str) -> Result<Self, AudioError> {
        let mainloop = Mainloop::new().ok_or_else(|| {
            AudioError::ConnectionFailed("Failed to create mainloop".to_string())
        })?;
        let mut context = Context::new(&mainloop, client_name).ok_or_else(|| {
            AudioError::ConnectionFailed("Failed to create context".to_string())
        })?;

        context
            .connect(None, ContextFlags::NOFLAGS, None)
            .map_err(|e| AudioError::ConnectionFailed(format!("Connection failed: {e}")))?;

        let mut session = Self { context, mainloop };
        session.wait_for_ready()?;
        debug!("Connected to PulseAudio");

        Ok(session)
    }

    fn iterate(&mut self) -> Result<(), AudioError> {
        match self.mainloop.iterate(true) {
            IterateResult::Success(_) => Ok(()),
            IterateResult::Quit(_) => Err(AudioError::ConnectionFailed(
                "Mainloop quit unexpectedly".to_string(),
            )),
            IterateResult::Err(e) => Err(AudioError::ConnectionFailed(format!(
                "Mainloop iteration failed: {e}"
            ))),
        }
    }

    fn wait_for_ready(&mut self) -> Result<(), AudioError> {
        loop {
            self.iterate()?;
            match self.context.get_state() {
                ContextState::Ready => return Ok(()),
                ContextState::Failed | ContextState::Terminated => {
                    return Err(AudioError::ConnectionFailed(
                        "Context failed to become ready".to_string(),
                    ));
                }
                _ => {}
            }
        }
    }

    fn wait_for<C: ?Sized>(&mut self, operation: &Operation<C>) -> Result<(), AudioError> {
        loop {
            match operation.get_state() {
                OperationState::Done => return Ok(()),
                OperationState::Cancelled => {
                    return Err(AudioError::OperationFailed(
                        "Operation was cancelled".to_string(),
                    ));
                }
                OperationState::Running => self.iterate()?,
            }
        }
    }
}

impl AudioControl for PulseSession {
    #[instrument(skip(self))]
    fn output_devices(&mut self) -> Result<Vec<DeviceInfo>, AudioError> {
        let devices = Rc::new(RefCell::new(Vec::new()));
        let failed = Rc::new(Cell::new(false));

        let operation = {
            let devices = Rc::clone(&devices);
            let failed = Rc::clone(&failed);
            self.context
                .introspect()
                .get_sink_info_list(move |result| match result {
                    ListResult::Item(sink_info) => {
                        devices
                            .borrow_mut()
                            .push(create_device_info_from_sink(sink_info));
                    }
                    ListResult::End => {}
                    ListResult::Error => failed.set(true),
                })
        };
        self.wait_for(&operation)?;

        if failed.get() {
            return Err(AudioError::OperationFailed(
                "Sink list query failed".to_string(),
            ));
        }

        let devices = devices.take();
        debug!(count = devices.len(), "Listed output devices");
        Ok(devices)
    }

    #[instrument(skip(self))]
    fn set_mute(&mut self, device: DeviceIndex, muted: bool) -> Result<(), AudioError> {
        let success = Rc::new(Cell::new(false));

        let operation = {
            let success = Rc::clone(&success);
            let mut introspect = self.context.introspect();
            introspect.set_sink_mute_by_index(
                device.0,
                muted,
                Some(Box::new(move |ok| success.set(ok))),
            )
        };
        self.wait_for(&operation)?;

        if success.get() {
            Ok(())
        } else {
            Err(AudioError::OperationFailed(format!(
                "Server rejected mute change for device {device}"
            )))
        }
    }

    #[instrument(skip(self))]
    fn set_volume(&mut self, device: DeviceIndex, volume: &Volume) -> Result<(), AudioError> {
        let pulse_volume = convert_volume_to_pulse(volume);
        let success = Rc::new(Cell::new(false));

        let operation = {
            let success = Rc::clone(&success);
            let mut introspect = self.context.introspect();
            introspect.set_sink_volume_by_index(
                device.0,
                &pulse_volume,
                Some(Box::new(move |ok| success.set(ok))),
            )
        };
        self.wait_for(&operation)?;

        if success.get() {
            Ok(())
        } else {
            Err(AudioError::OperationFailed(format!(
                "Server rejected volume change for device {device}"
            )))
        }
    }
}

impl Drop for PulseSession {
    fn drop(&mut self) {
        self.context.disconnect();
        debug!("Disconnected from PulseAudio");
    }
}
