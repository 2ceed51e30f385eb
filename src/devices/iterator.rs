// iterator.rs

/// Forward-only cursor over a borrowed list of device names.
///
/// Once exhausted it keeps returning `None`; walking the same names again
/// takes a fresh iterator.
#[derive(Debug, Clone)]
pub struct DeviceIterator<'a> {
    devices: &'a [String],
    index: usize,
}

impl<'a> DeviceIterator<'a> {
    pub fn new(devices: &'a [String]) -> Self {
        Self { devices, index: 0 }
    }

    pub fn has_next(&self) -> bool {
        self.index < self.devices.len()
    }

    pub fn remaining(&self) -> usize {
        self.devices.len() - self.index
    }
}

impl<'a> Iterator for DeviceIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let device = self.devices.get(self.index)?;
        self.index += 1;
        Some(device.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for DeviceIterator<'_> {}

impl std::iter::FusedIterator for DeviceIterator<'_> {}
