/*!
# Example
Shows how to build a PTP management GET request and parse the reply.

```rust
use ptpmgmt::{ActionField, Message, MngId};

fn main() {
    let mut msg = Message::new();
    msg.set_action(ActionField::Get, MngId::Priority1).unwrap();

    let mut buf = [0u8; 1500];
    let len = msg.build(&mut buf, 1).unwrap();
    assert_eq!(len, 54);
    // Send buf[..len] through your transport, receive the reply into
    // buf, then:
    //
    //     match msg.parse(&buf[..received]) {
    //         Ok(ptpmgmt::ParseStatus::Ok) => match msg.data() {
    //             Some(MngTlv::Priority1(p)) => println!("{}", p.priority1),
    //             _ => {}
    //         },
    //         Ok(status) => println!("other frame: {:?}", status),
    //         Err(e) => eprintln!("{}", e),
    //     }
}
```
*/

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Error types for management message building and parsing.
pub mod error;

/// The management ID registry: codes, scopes, allowed actions and size
/// policies, generated from one declarative table.
pub mod ids;

/// Management TLV payload records and marshallers.
pub mod mgmt;

/// The message framer and session parameters.
pub mod msg;

/// Octet buffer with hex, MAC-id and IP textual round-trips.
pub mod octets;

/// Primitive protocol types, enumerations and their textual tokens.
pub mod protocol;

/// Signaling TLV records and marshallers.
pub mod sig;

mod cursor;

pub use error::MngError;
pub use ids::{Dialect, MngId, MngSize, Scope};
pub use mgmt::MngTlv;
pub use msg::{Message, MsgParams, ParseStatus};
pub use octets::Octets;
pub use protocol::{ActionField, ManagementErrorId, TlvType};
pub use sig::SigTlv;
