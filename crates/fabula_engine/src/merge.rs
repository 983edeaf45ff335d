//! The patch merger: atomic application of reconciled patches.

use fabula_foundation::{Error, ErrorKind, ObjectPatch, PatchSet, PlayerPatch, Result};
use fabula_world::{Entity, WorldStore};

/// Applies the reconciled patches to the store as a single commit.
///
/// The store is cloned (cheap, persistent structures), patches apply in
/// order to the clone, and the clone replaces the canonical store only if
/// every patch applied - a failing patch leaves no partial state. Within one
/// entity, a later patch overwrites an earlier one for the same key; writes
/// to frozen or derived keys are silently dropped.
///
/// # Errors
///
/// Returns a contract error when a patch targets an unknown id, carries a
/// fixed object, or breaks the inventory invariants. Handlers guard these
/// conditions with player-facing messages first, so these errors mark
/// defective content rather than player mistakes.
pub fn commit(world: &mut WorldStore, patches: &PatchSet) -> Result<()> {
    let mut next = world.clone();
    apply(&mut next, patches)?;
    *world = next;
    Ok(())
}

fn apply(world: &mut WorldStore, patches: &PatchSet) -> Result<()> {
    for patch in &patches.player {
        match patch {
            PlayerPatch::MoveTo(destination) => {
                world.require_location(*destination)?;
                world.player_mut().set_location(*destination);
            }
            PlayerPatch::Take(id) => {
                if world.require_object(*id)?.identity().is_fixed {
                    return Err(Error::new(ErrorKind::FixedCarried(*id)));
                }
                world.player_mut().take(*id)?;
            }
            PlayerPatch::Drop(id) => {
                world.require_object(*id)?;
                world.player_mut().release(*id)?;
            }
            PlayerPatch::State(op) => {
                world.player_mut().apply_state(op);
            }
        }
    }

    for (id, patch) in &patches.objects {
        match patch {
            ObjectPatch::SetRoom(room) => {
                if let Some(destination) = room {
                    world.require_location(*destination)?;
                }
                world.object_mut(*id)?.set_room(*room);
            }
            ObjectPatch::ClearContents => {
                world.object_mut(*id)?.clear_contents();
            }
            ObjectPatch::AppendContents(contained) => {
                world.require_object(*contained)?;
                world.object_mut(*id)?.push_contents(*contained);
            }
            ObjectPatch::State(op) => {
                world.object_mut(*id)?.apply_state(op);
            }
        }
    }

    for (id, op) in &patches.locations {
        world.location_mut(*id)?.apply_state(op);
    }

    Ok(())
}
