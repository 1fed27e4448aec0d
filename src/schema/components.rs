/// Typed component keys and shared description enums.
///
/// Known `minecraft:*` component names get an enum variant for static
/// checking; `Custom` is the open extension point for keys the
/// enumeration has not caught up with yet. `From<&str>` maps a known
/// name back to its variant, so adders accept both forms.

/// Creative-menu placement of an item or block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCategory {
    Construction,
    Equipment,
    Items,
    Nature,
    None,
}

impl MenuCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Construction => "construction",
            Self::Equipment => "equipment",
            Self::Items => "items",
            Self::Nature => "nature",
            Self::None => "none",
        }
    }
}

macro_rules! component_key {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $key:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum $name {
            $($variant,)+
            /// Any component name not covered by the enumeration.
            Custom(String),
        }

        impl $name {
            /// The namespaced component key written into the document.
            pub fn key(&self) -> &str {
                match self {
                    $(Self::$variant => $key,)+
                    Self::Custom(key) => key,
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                match raw {
                    $($key => Self::$variant,)+
                    other => Self::Custom(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self::from(raw.as_str())
            }
        }
    };
}

component_key! {
    /// Item behavior components.
    ItemComponent {
        Icon => "minecraft:icon",
        DisplayName => "minecraft:display_name",
        MaxStackSize => "minecraft:max_stack_size",
        Durability => "minecraft:durability",
        Food => "minecraft:food",
        Wearable => "minecraft:wearable",
        HandEquipped => "minecraft:hand_equipped",
        Glint => "minecraft:glint",
        UseAnimation => "minecraft:use_animation",
        Damage => "minecraft:damage",
    }
}

component_key! {
    /// Block behavior components.
    BlockComponent {
        LightEmission => "minecraft:light_emission",
        LightDampening => "minecraft:light_dampening",
        Friction => "minecraft:friction",
        DestructibleByMining => "minecraft:destructible_by_mining",
        DestructibleByExplosion => "minecraft:destructible_by_explosion",
        Flammable => "minecraft:flammable",
        MapColor => "minecraft:map_color",
        Geometry => "minecraft:geometry",
        MaterialInstances => "minecraft:material_instances",
        Loot => "minecraft:loot",
    }
}

component_key! {
    /// Entity behavior components.
    EntityComponent {
        Health => "minecraft:health",
        Movement => "minecraft:movement",
        Physics => "minecraft:physics",
        Pushable => "minecraft:pushable",
        Scale => "minecraft:scale",
        CollisionBox => "minecraft:collision_box",
        TypeFamily => "minecraft:type_family",
        JumpStatic => "minecraft:jump.static",
        Nameable => "minecraft:nameable",
        Breathable => "minecraft:breathable",
    }
}
