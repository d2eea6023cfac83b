macro_rules! field_table {
	($(#[$enum_meta:meta])* $vis:vis enum $enum_id:ident { $($(#[$meta:meta])* $id:ident : $tag:literal => $name:literal),* }) => {
		$(#[$enum_meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
		$vis enum $enum_id {
			$($(#[$meta])* $id),*
		}

		impl $enum_id {
			pub const COUNT: usize = $crate::aamva::field_table!(@count $($id,)*);
			pub const LIST: [Self; Self::COUNT] = [$(Self::$id),*];

			/// Looks up the field carried by the given element code.
			pub fn from_code(code: &[u8; 3]) -> Option<Self> {
				match code {
					$($tag => Some(Self::$id),)*
					_ => None
				}
			}

			/// Element code, as it appears at the start of a subfile line.
			pub fn code(&self) -> &'static [u8; 3] {
				match self {
					$(Self::$id => $tag),*
				}
			}

			/// Canonical output key.
			pub fn name(&self) -> &'static str {
				match self {
					$(Self::$id => $name),*
				}
			}
		}

		impl $enum_id {
			pub fn string_code(&self) -> &'static str {
				unsafe { std::str::from_utf8_unchecked(self.code()) }
			}
		}
	};
	(@count $a:ident, $($rest:ident,)*) => {
		1usize + $crate::aamva::field_table!(@count $($rest,)*)
	};
	(@count) => {
		0usize
	}
}

pub(crate) use field_table;
