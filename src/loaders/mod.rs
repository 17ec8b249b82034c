pub mod combatflite;
