use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use eframe::egui;

// Types
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    None,
    Ctrl,
    Alt,
    Shift,
    CtrlShift,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Modifier::None => "",
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::CtrlShift => "Ctrl+Shift",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotkey {
    pub modifier: Modifier,
    pub key: char,
}

impl Hotkey {
    pub fn new(modifier: Modifier, key: char) -> Self {
        Self {
            modifier,
            key: key.to_ascii_uppercase(),
        }
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifier == Modifier::None {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifier, self.key)
        }
    }
}

impl FromStr for Hotkey {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty hotkey".to_string());
        }
        let parts: Vec<&str> = s.split('+').map(|p| p.trim()).collect();
        let last = parts.last().unwrap();
        let ch = last
            .chars()
            .next()
            .ok_or_else(|| "no key char".to_string())?;
        let mods = &parts[..parts.len().saturating_sub(1)];
        let modifier = match mods.len() {
            0 => Modifier::None,
            1 => match mods[0].to_lowercase().as_str() {
                "ctrl" | "control" => Modifier::Ctrl,
                "alt" => Modifier::Alt,
                "shift" => Modifier::Shift,
                other => return Err(format!("unknown modifier '{}'", other)),
            },
            2 => {
                let a = mods[0].to_lowercase();
                let b = mods[1].to_lowercase();
                if (a == "ctrl" && b == "shift") || (a == "shift" && b == "ctrl") {
                    Modifier::CtrlShift
                } else {
                    return Err(format!("unknown modifier combo '{:?}'", mods));
                }
            }
            _ => return Err(format!("unknown modifier combo '{:?}'", mods)),
        };
        Ok(Hotkey::new(modifier, ch))
    }
}

/// An app action a hotkey can trigger.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HotkeyAction {
    SelectTool,
    LineTool,
    CalibrateTool,
    MoveTool,
    CycleUnits,
    OpenPhoto,
    ExportPng,
    ClearAll,
    AnalyzePhoto,
}

/// Keyboard bindings, persisted as YAML under `~/.photodim/hotkeys.yaml`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotkeys {
    pub select_tool: Option<Hotkey>,
    pub line_tool: Option<Hotkey>,
    pub calibrate_tool: Option<Hotkey>,
    pub move_tool: Option<Hotkey>,
    pub cycle_units: Option<Hotkey>,
    pub open_photo: Option<Hotkey>,
    pub export_png: Option<Hotkey>,
    pub clear_all: Option<Hotkey>,
    pub analyze_photo: Option<Hotkey>,
}

impl Default for Hotkeys {
    fn default() -> Self {
        Self {
            select_tool: Some(Hotkey::new(Modifier::None, 'V')),
            line_tool: Some(Hotkey::new(Modifier::None, 'L')),
            calibrate_tool: Some(Hotkey::new(Modifier::None, 'C')),
            move_tool: Some(Hotkey::new(Modifier::None, 'M')),
            cycle_units: Some(Hotkey::new(Modifier::None, 'U')),
            open_photo: Some(Hotkey::new(Modifier::Ctrl, 'O')),
            export_png: Some(Hotkey::new(Modifier::Ctrl, 'E')),
            clear_all: Some(Hotkey::new(Modifier::Ctrl, 'X')),
            analyze_photo: Some(Hotkey::new(Modifier::None, 'A')),
        }
    }
}

impl Hotkeys {
    fn bindings(&self) -> [(Option<Hotkey>, HotkeyAction); 9] {
        [
            (self.select_tool, HotkeyAction::SelectTool),
            (self.line_tool, HotkeyAction::LineTool),
            (self.calibrate_tool, HotkeyAction::CalibrateTool),
            (self.move_tool, HotkeyAction::MoveTool),
            (self.cycle_units, HotkeyAction::CycleUnits),
            (self.open_photo, HotkeyAction::OpenPhoto),
            (self.export_png, HotkeyAction::ExportPng),
            (self.clear_all, HotkeyAction::ClearAll),
            (self.analyze_photo, HotkeyAction::AnalyzePhoto),
        ]
    }

    /// The first bound action whose key chord was pressed this frame.
    ///
    /// Callers should skip this while a text field owns the keyboard.
    pub fn action(&self, input: &egui::InputState) -> Option<HotkeyAction> {
        self.bindings()
            .into_iter()
            .find(|(hk, _)| is_hotkey_pressed(hk.as_ref(), input))
            .map(|(_, action)| action)
    }

    pub fn save_to_default_path(&self) -> Result<(), String> {
        let home = std::env::var("HOME").map_err(|e| format!("HOME env var not set: {}", e))?;
        let dir = PathBuf::from(home).join(".photodim");
        if let Err(e) = fs::create_dir_all(&dir) {
            return Err(format!("Failed to create dir {:?}: {}", dir, e));
        }
        let path = dir.join("hotkeys.yaml");
        let s = serde_yaml::to_string(self).map_err(|e| format!("Serialization error: {}", e))?;
        let mut f = fs::File::create(&path)
            .map_err(|e| format!("Failed to create file {:?}: {}", path, e))?;
        f.write_all(s.as_bytes())
            .map_err(|e| format!("Failed to write file {:?}: {}", path, e))?;
        Ok(())
    }

    pub fn load_from_default_path() -> Result<Hotkeys, String> {
        let home = std::env::var("HOME").map_err(|e| format!("HOME env var not set: {}", e))?;
        let path = PathBuf::from(home).join(".photodim").join("hotkeys.yaml");
        if !path.exists() {
            return Err(format!("Hotkeys file {:?} does not exist", path));
        }
        let s =
            fs::read_to_string(&path).map_err(|e| format!("Failed to read {:?}: {}", path, e))?;
        let hk: Hotkeys =
            serde_yaml::from_str(&s).map_err(|e| format!("Deserialization error: {}", e))?;
        Ok(hk)
    }
}

fn key_from_char(c: char) -> Option<egui::Key> {
    match c.to_ascii_uppercase() {
        'A' => Some(egui::Key::A),
        'B' => Some(egui::Key::B),
        'C' => Some(egui::Key::C),
        'D' => Some(egui::Key::D),
        'E' => Some(egui::Key::E),
        'F' => Some(egui::Key::F),
        'G' => Some(egui::Key::G),
        'H' => Some(egui::Key::H),
        'I' => Some(egui::Key::I),
        'J' => Some(egui::Key::J),
        'K' => Some(egui::Key::K),
        'L' => Some(egui::Key::L),
        'M' => Some(egui::Key::M),
        'N' => Some(egui::Key::N),
        'O' => Some(egui::Key::O),
        'P' => Some(egui::Key::P),
        'Q' => Some(egui::Key::Q),
        'R' => Some(egui::Key::R),
        'S' => Some(egui::Key::S),
        'T' => Some(egui::Key::T),
        'U' => Some(egui::Key::U),
        'V' => Some(egui::Key::V),
        'W' => Some(egui::Key::W),
        'X' => Some(egui::Key::X),
        'Y' => Some(egui::Key::Y),
        'Z' => Some(egui::Key::Z),
        '0' => Some(egui::Key::Num0),
        '1' => Some(egui::Key::Num1),
        '2' => Some(egui::Key::Num2),
        '3' => Some(egui::Key::Num3),
        '4' => Some(egui::Key::Num4),
        '5' => Some(egui::Key::Num5),
        '6' => Some(egui::Key::Num6),
        '7' => Some(egui::Key::Num7),
        '8' => Some(egui::Key::Num8),
        '9' => Some(egui::Key::Num9),
        ' ' => Some(egui::Key::Space),
        _ => None,
    }
}

fn modifiers_match(mods: &egui::Modifiers, modifier: Modifier) -> bool {
    let ctrl = mods.ctrl || mods.command;
    let alt = mods.alt;
    let shift = mods.shift;
    match modifier {
        Modifier::None => !ctrl && !alt,
        Modifier::Ctrl => ctrl && !alt && !shift,
        Modifier::Alt => alt && !ctrl,
        Modifier::Shift => shift && !ctrl && !alt,
        Modifier::CtrlShift => ctrl && shift && !alt,
    }
}

fn is_hotkey_pressed(hk: Option<&Hotkey>, input: &egui::InputState) -> bool {
    let Some(hk) = hk else { return false };
    let Some(key) = key_from_char(hk.key) else {
        return false;
    };
    if !modifiers_match(&input.modifiers, hk.modifier) {
        return false;
    }
    input.key_pressed(key)
}
