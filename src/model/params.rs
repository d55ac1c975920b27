use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Parameter {
    Eye,
    Gills,
    Slime,
    Flesh,
    Odor,
    Texture,
}

impl Parameter {
    pub fn key(self) -> &'static str {
        match self {
            Parameter::Eye => "eye",
            Parameter::Gills => "gills",
            Parameter::Slime => "slime",
            Parameter::Flesh => "flesh",
            Parameter::Odor => "odor",
            Parameter::Texture => "texture",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Parameter::Eye => "Mata",
            Parameter::Gills => "Insang",
            Parameter::Slime => "Lendir",
            Parameter::Flesh => "Daging",
            Parameter::Odor => "Bau",
            Parameter::Texture => "Tekstur",
        }
    }

    pub fn from_key(key: &str) -> Option<Parameter> {
        parameter_order().iter().copied().find(|p| p.key() == key)
    }
}

// best-parameter ties resolve in this order
pub fn parameter_order() -> &'static [Parameter] {
    &[
        Parameter::Eye,
        Parameter::Gills,
        Parameter::Slime,
        Parameter::Flesh,
        Parameter::Odor,
        Parameter::Texture,
    ]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterRecord {
    pub eye: Option<i32>,
    pub gills: Option<i32>,
    pub slime: Option<i32>,
    pub flesh: Option<i32>,
    pub odor: Option<i32>,
    pub texture: Option<i32>,
}

impl ParameterRecord {
    pub fn uniform(value: i32) -> Self {
        Self {
            eye: Some(value),
            gills: Some(value),
            slime: Some(value),
            flesh: Some(value),
            odor: Some(value),
            texture: Some(value),
        }
    }

    pub fn get(&self, parameter: Parameter) -> Option<i32> {
        match parameter {
            Parameter::Eye => self.eye,
            Parameter::Gills => self.gills,
            Parameter::Slime => self.slime,
            Parameter::Flesh => self.flesh,
            Parameter::Odor => self.odor,
            Parameter::Texture => self.texture,
        }
    }

    pub fn set(&mut self, parameter: Parameter, value: Option<i32>) {
        let slot = match parameter {
            Parameter::Eye => &mut self.eye,
            Parameter::Gills => &mut self.gills,
            Parameter::Slime => &mut self.slime,
            Parameter::Flesh => &mut self.flesh,
            Parameter::Odor => &mut self.odor,
            Parameter::Texture => &mut self.texture,
        };
        *slot = value;
    }

    pub fn present(&self) -> Vec<(Parameter, i32)> {
        parameter_order()
            .iter()
            .filter_map(|&p| self.get(p).map(|v| (p, v)))
            .collect()
    }

    pub fn missing(&self) -> Vec<Parameter> {
        parameter_order()
            .iter()
            .copied()
            .filter(|&p| self.get(p).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/params.rs"]
mod tests;
