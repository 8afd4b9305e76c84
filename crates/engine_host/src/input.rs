//! Input value types passed to the engine's input entry points.
//!
//! Key codes use the engine's GLFW-compatible numbering. They are a newtype
//! rather than an enum so that codes the table below does not name can still
//! be forwarded.

/// A keyboard key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub i32);

impl KeyCode {
    pub const SPACE: Self = Self(32);
    pub const APOSTROPHE: Self = Self(39);
    pub const COMMA: Self = Self(44);
    pub const MINUS: Self = Self(45);
    pub const PERIOD: Self = Self(46);
    pub const SLASH: Self = Self(47);
    pub const SEMICOLON: Self = Self(59);
    pub const EQUAL: Self = Self(61);
    pub const LEFT_BRACKET: Self = Self(91);
    pub const BACKSLASH: Self = Self(92);
    pub const RIGHT_BRACKET: Self = Self(93);
    pub const GRAVE_ACCENT: Self = Self(96);
    pub const WORLD_1: Self = Self(161);
    pub const WORLD_2: Self = Self(162);
    pub const NUM_0: Self = Self(48);
    pub const NUM_1: Self = Self(49);
    pub const NUM_2: Self = Self(50);
    pub const NUM_3: Self = Self(51);
    pub const NUM_4: Self = Self(52);
    pub const NUM_5: Self = Self(53);
    pub const NUM_6: Self = Self(54);
    pub const NUM_7: Self = Self(55);
    pub const NUM_8: Self = Self(56);
    pub const NUM_9: Self = Self(57);
    pub const A: Self = Self(65);
    pub const B: Self = Self(66);
    pub const C: Self = Self(67);
    pub const D: Self = Self(68);
    pub const E: Self = Self(69);
    pub const F: Self = Self(70);
    pub const G: Self = Self(71);
    pub const H: Self = Self(72);
    pub const I: Self = Self(73);
    pub const J: Self = Self(74);
    pub const K: Self = Self(75);
    pub const L: Self = Self(76);
    pub const M: Self = Self(77);
    pub const N: Self = Self(78);
    pub const O: Self = Self(79);
    pub const P: Self = Self(80);
    pub const Q: Self = Self(81);
    pub const R: Self = Self(82);
    pub const S: Self = Self(83);
    pub const T: Self = Self(84);
    pub const U: Self = Self(85);
    pub const V: Self = Self(86);
    pub const W: Self = Self(87);
    pub const X: Self = Self(88);
    pub const Y: Self = Self(89);
    pub const Z: Self = Self(90);
    pub const ESCAPE: Self = Self(256);
    pub const ENTER: Self = Self(257);
    pub const TAB: Self = Self(258);
    pub const BACKSPACE: Self = Self(259);
    pub const INSERT: Self = Self(260);
    pub const DELETE: Self = Self(261);
    pub const RIGHT: Self = Self(262);
    pub const LEFT: Self = Self(263);
    pub const DOWN: Self = Self(264);
    pub const UP: Self = Self(265);
    pub const PAGE_UP: Self = Self(266);
    pub const PAGE_DOWN: Self = Self(267);
    pub const HOME: Self = Self(268);
    pub const END: Self = Self(269);
    pub const CAPS_LOCK: Self = Self(280);
    pub const SCROLL_LOCK: Self = Self(281);
    pub const NUM_LOCK: Self = Self(282);
    pub const PRINT_SCREEN: Self = Self(283);
    pub const PAUSE: Self = Self(284);
    pub const F1: Self = Self(290);
    pub const F2: Self = Self(291);
    pub const F3: Self = Self(292);
    pub const F4: Self = Self(293);
    pub const F5: Self = Self(294);
    pub const F6: Self = Self(295);
    pub const F7: Self = Self(296);
    pub const F8: Self = Self(297);
    pub const F9: Self = Self(298);
    pub const F10: Self = Self(299);
    pub const F11: Self = Self(300);
    pub const F12: Self = Self(301);
    pub const F13: Self = Self(302);
    pub const F14: Self = Self(303);
    pub const F15: Self = Self(304);
    pub const F16: Self = Self(305);
    pub const F17: Self = Self(306);
    pub const F18: Self = Self(307);
    pub const F19: Self = Self(308);
    pub const F20: Self = Self(309);
    pub const F21: Self = Self(310);
    pub const F22: Self = Self(311);
    pub const F23: Self = Self(312);
    pub const F24: Self = Self(313);
    pub const F25: Self = Self(314);
    pub const KP_0: Self = Self(320);
    pub const KP_1: Self = Self(321);
    pub const KP_2: Self = Self(322);
    pub const KP_3: Self = Self(323);
    pub const KP_4: Self = Self(324);
    pub const KP_5: Self = Self(325);
    pub const KP_6: Self = Self(326);
    pub const KP_7: Self = Self(327);
    pub const KP_8: Self = Self(328);
    pub const KP_9: Self = Self(329);
    pub const KP_DECIMAL: Self = Self(330);
    pub const KP_DIVIDE: Self = Self(331);
    pub const KP_MULTIPLY: Self = Self(332);
    pub const KP_SUBTRACT: Self = Self(333);
    pub const KP_ADD: Self = Self(334);
    pub const KP_ENTER: Self = Self(335);
    pub const KP_EQUAL: Self = Self(336);
    pub const LEFT_SHIFT: Self = Self(340);
    pub const LEFT_CONTROL: Self = Self(341);
    pub const LEFT_ALT: Self = Self(342);
    pub const LEFT_SUPER: Self = Self(343);
    pub const RIGHT_SHIFT: Self = Self(344);
    pub const RIGHT_CONTROL: Self = Self(345);
    pub const RIGHT_ALT: Self = Self(346);
    pub const RIGHT_SUPER: Self = Self(347);
    pub const MENU: Self = Self(348);
    /// Returns the raw engine key code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self.0
    }
}

/// A mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum MouseButton {
    Left = 0,
    Right = 1,
    Middle = 2,
    Button3 = 3,
    Button4 = 4,
    Button5 = 5,
    Button6 = 6,
    Button7 = 7,
}

/// A standard-layout gamepad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum GamepadButton {
    A = 0,
    B = 1,
    X = 2,
    Y = 3,
    LeftBumper = 4,
    RightBumper = 5,
    Back = 6,
    Start = 7,
    Guide = 8,
    LeftThumb = 9,
    RightThumb = 10,
    DpadUp = 11,
    DpadRight = 12,
    DpadDown = 13,
    DpadLeft = 14,
}

impl GamepadButton {
    /// Returns the raw button index the engine expects.
    #[must_use]
    pub const fn index(self) -> i32 {
        self as i32
    }
}

/// How the engine window treats the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorMode {
    #[default]
    Normal,
    Hidden,
    Locked,
}
